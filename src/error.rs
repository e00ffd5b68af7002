use crate::{messages::INVALID_TOKEN_RESPONSE, storage::SecretStoreError};
use thiserror::Error;

/// Reasons an authorization request does not produce a policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorizerError {
    /// The expected token(s) could not be read from the secret store.
    #[error(transparent)]
    UpstreamLookup(#[from] SecretStoreError),

    /// The supplied token is not one of the expected tokens.
    #[error("{}", INVALID_TOKEN_RESPONSE)]
    Denied,
}
