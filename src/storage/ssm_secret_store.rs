use super::{SecretStore, SecretStoreError};
use async_trait::async_trait;
use aws_sdk_ssm::{error::DisplayErrorContext, Client};

/// A secret store backed by AWS Systems Manager Parameter Store.
#[derive(Debug, Clone)]
pub struct SsmSecretStore {
    client: Client,
}

impl SsmSecretStore {
    /// Create a new instance of [`SsmSecretStore`] using an already configured client.
    pub fn new(client: Client) -> SsmSecretStore {
        SsmSecretStore { client }
    }
}

#[async_trait]
impl SecretStore for SsmSecretStore {
    async fn get_parameter(
        &self,
        name: &str,
        with_decryption: bool,
    ) -> Result<String, SecretStoreError> {
        let output = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(with_decryption)
            .send()
            .await
            .map_err(|err| SecretStoreError::Request {
                name: name.to_string(),
                message: DisplayErrorContext(err).to_string(),
            })?;

        output
            .parameter()
            .and_then(|parameter| parameter.value())
            .map(str::to_string)
            .ok_or_else(|| SecretStoreError::NotFound(name.to_string()))
    }
}
