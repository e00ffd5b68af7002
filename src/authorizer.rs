use crate::{
    api::{requests::AuthorizationRequest, responses::AuthorizerResponse},
    config::AuthorizerConfig,
    error::AuthorizerError,
    storage::SecretStore,
};
use tracing::{error, info, warn};

/// Decides whether a gateway request may reach the backend.
///
/// The expected token(s) are read from the injected [`SecretStore`] on every call,
/// nothing is cached between invocations.
#[derive(Debug)]
pub struct TokenAuthorizer<S> {
    store: S,
    config: AuthorizerConfig,
}

impl<S: SecretStore> TokenAuthorizer<S> {
    pub fn new(store: S, config: AuthorizerConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &AuthorizerConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Authorize a request, producing an allow policy for its method ARN when the token matches.
    pub async fn authorize(
        &self,
        request: &AuthorizationRequest,
    ) -> Result<AuthorizerResponse, AuthorizerError> {
        let expected = self
            .store
            .get_parameter(&self.config.token_path, true)
            .await
            .map_err(|err| {
                error!(token_path = %self.config.token_path, error = %err, "token lookup failed");
                err
            })?;

        if !self
            .config
            .match_strategy
            .matches(&expected, &request.authorization_token)
        {
            warn!(method_arn = %request.method_arn, "rejected request with invalid token");
            return Err(AuthorizerError::Denied);
        }

        info!(method_arn = %request.method_arn, "authorized request");
        Ok(AuthorizerResponse::allow(&request.method_arn))
    }
}
