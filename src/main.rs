use lambda_runtime::{service_fn, Error, LambdaEvent};
use token_authorizer::{
    handler::handle_request, AuthorizationRequest, AuthorizerConfig, SsmSecretStore,
    TokenAuthorizer,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    let config = AuthorizerConfig::from_env()?;
    tracing::info!(
        token_path = %config.token_path,
        match_strategy = %config.match_strategy,
        "starting token authorizer"
    );

    let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = SsmSecretStore::new(aws_sdk_ssm::Client::new(&sdk_config));
    let authorizer = TokenAuthorizer::new(store, config);
    let authorizer = &authorizer;

    lambda_runtime::run(service_fn(
        move |event: LambdaEvent<AuthorizationRequest>| async move {
            handle_request(authorizer, event.payload).await
        },
    ))
    .await
}
