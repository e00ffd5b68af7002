pub mod ssm_secret_store;

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while reading a secret.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretStoreError {
    /// The parameter does not exist or has no value.
    #[error("parameter '{0}' was not found")]
    NotFound(String),

    /// The store could not be reached or refused the request.
    #[error("failed to read parameter '{name}': {message}")]
    Request { name: String, message: String },
}

/// Represents a store of named, optionally encrypted, secret values.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Get the value of a parameter, decrypting it first if `with_decryption` is set.
    async fn get_parameter(
        &self,
        name: &str,
        with_decryption: bool,
    ) -> Result<String, SecretStoreError>;
}
