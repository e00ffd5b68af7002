use crate::authentication::{MatchStrategy, UnknownMatchStrategy};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// The environment variable naming the parameter that holds the expected token(s).
pub const TOKEN_PATH_VAR: &str = "TOKEN_PATH";

/// The environment variable selecting the [`MatchStrategy`].
pub const MATCH_STRATEGY_VAR: &str = "TOKEN_MATCH_STRATEGY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),

    #[error("invalid TOKEN_MATCH_STRATEGY: {0}")]
    InvalidStrategy(#[from] UnknownMatchStrategy),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationErrors),
}

/// Settings for the authorizer, read once at start-up.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct AuthorizerConfig {
    /// The name of the parameter holding the expected token(s).
    #[validate(length(min = 1))]
    pub token_path: String,
    /// How the stored value is compared against the supplied token.
    pub match_strategy: MatchStrategy,
}

impl AuthorizerConfig {
    pub fn new(token_path: impl Into<String>, match_strategy: MatchStrategy) -> Self {
        Self {
            token_path: token_path.into(),
            match_strategy,
        }
    }

    /// Load the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration using `lookup` to resolve each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token_path = lookup(TOKEN_PATH_VAR).ok_or(ConfigError::Missing(TOKEN_PATH_VAR))?;
        let match_strategy = match lookup(MATCH_STRATEGY_VAR) {
            Some(value) => value.parse()?,
            None => MatchStrategy::default(),
        };

        let config = Self {
            token_path,
            match_strategy,
        };
        config.validate()?;
        Ok(config)
    }
}
