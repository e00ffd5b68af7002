pub mod api;
pub mod authentication;
pub mod authorizer;
pub mod config;
pub mod error;
pub mod handler;
pub mod messages;
pub mod models;
pub mod storage;

pub use api::{requests::AuthorizationRequest, responses::AuthorizerResponse};
pub use authentication::MatchStrategy;
pub use authorizer::TokenAuthorizer;
pub use config::{AuthorizerConfig, ConfigError};
pub use error::AuthorizerError;
pub use models::policy::{PolicyDocument, PolicyStatement};
pub use storage::{ssm_secret_store::SsmSecretStore, SecretStore, SecretStoreError};
