use std::{fmt, str::FromStr};
use thiserror::Error;

/// The delimiter between tokens when the stored value is an allow-list.
const TOKEN_DELIMITER: char = ',';

/// How the stored secret is compared against the supplied token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchStrategy {
    /// The stored value is a single token and must equal the supplied token.
    Exact,
    /// The stored value is a comma-separated allow-list containing the supplied token.
    #[default]
    List,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown match strategy '{0}', expected 'exact' or 'list'")]
pub struct UnknownMatchStrategy(pub String);

impl MatchStrategy {
    /// Checks if the supplied token is accepted by the stored secret.
    ///
    /// Comparison is exact and case-sensitive, no whitespace is trimmed.
    pub fn matches(self, stored: &str, supplied: &str) -> bool {
        match self {
            MatchStrategy::Exact => stored == supplied,
            MatchStrategy::List => stored
                .split(TOKEN_DELIMITER)
                .any(|expected| expected == supplied),
        }
    }
}

impl FromStr for MatchStrategy {
    type Err = UnknownMatchStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exact" => Ok(MatchStrategy::Exact),
            "list" => Ok(MatchStrategy::List),
            _ => Err(UnknownMatchStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStrategy::Exact => f.write_str("exact"),
            MatchStrategy::List => f.write_str("list"),
        }
    }
}
