use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};
use token_authorizer::{
    handler::handle_request, AuthorizationRequest, AuthorizerConfig, AuthorizerError,
    MatchStrategy, SecretStore, SecretStoreError, TokenAuthorizer,
};

const TOKEN_PATH: &str = "/buildkite/agent-token";
const METHOD_ARN: &str = "arn:aws:execute-api:us-east-1:123456789012:abcdef123/prod/GET/resource";

/// An in-memory store that records how it was called.
struct FakeSecretStore {
    value: Mutex<Result<String, SecretStoreError>>,
    reads: AtomicUsize,
    last_call: Mutex<Option<(String, bool)>>,
}

impl FakeSecretStore {
    fn with_value(value: &str) -> Self {
        Self::with_result(Ok(value.to_string()))
    }

    fn with_result(result: Result<String, SecretStoreError>) -> Self {
        Self {
            value: Mutex::new(result),
            reads: AtomicUsize::new(0),
            last_call: Mutex::new(None),
        }
    }

    fn set_value(&self, value: &str) {
        *self.value.lock().unwrap() = Ok(value.to_string());
    }
}

#[async_trait]
impl SecretStore for FakeSecretStore {
    async fn get_parameter(
        &self,
        name: &str,
        with_decryption: bool,
    ) -> Result<String, SecretStoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        *self.last_call.lock().unwrap() = Some((name.to_string(), with_decryption));
        self.value.lock().unwrap().clone()
    }
}

fn authorizer(store: FakeSecretStore, strategy: MatchStrategy) -> TokenAuthorizer<FakeSecretStore> {
    TokenAuthorizer::new(store, AuthorizerConfig::new(TOKEN_PATH, strategy))
}

#[tokio::test]
async fn matching_token_is_allowed_on_the_method_arn() {
    let authorizer = authorizer(FakeSecretStore::with_value("secret123"), MatchStrategy::Exact);

    let response = authorizer
        .authorize(&AuthorizationRequest::new("secret123", METHOD_ARN))
        .await
        .unwrap();

    assert_eq!(response.principal_id, "buildkite");
    assert_eq!(response.policy_document.version, "2012-10-17");
    assert_eq!(response.policy_document.statement.len(), 1);
    let statement = &response.policy_document.statement[0];
    assert_eq!(statement.action, "execute-api:Invoke");
    assert_eq!(statement.effect, "Allow");
    assert_eq!(statement.resource, METHOD_ARN);
}

#[tokio::test]
async fn wrong_token_is_denied() {
    let authorizer = authorizer(FakeSecretStore::with_value("secret123"), MatchStrategy::Exact);

    let err = authorizer
        .authorize(&AuthorizationRequest::new("wrong", METHOD_ARN))
        .await
        .unwrap_err();

    assert_eq!(err, AuthorizerError::Denied);
    assert_eq!(err.to_string(), "Invalid token");
}

#[tokio::test]
async fn list_strategy_accepts_any_listed_token() {
    let authorizer = authorizer(FakeSecretStore::with_value("tokenA,tokenB"), MatchStrategy::List);

    assert!(authorizer
        .authorize(&AuthorizationRequest::new("tokenA", METHOD_ARN))
        .await
        .is_ok());
    assert!(authorizer
        .authorize(&AuthorizationRequest::new("tokenB", METHOD_ARN))
        .await
        .is_ok());
    assert_eq!(
        authorizer
            .authorize(&AuthorizationRequest::new("tokenC", METHOD_ARN))
            .await,
        Err(AuthorizerError::Denied)
    );
}

#[tokio::test]
async fn exact_strategy_does_not_split_the_stored_value() {
    let authorizer = authorizer(FakeSecretStore::with_value("tokenA,tokenB"), MatchStrategy::Exact);

    assert_eq!(
        authorizer
            .authorize(&AuthorizationRequest::new("tokenA", METHOD_ARN))
            .await,
        Err(AuthorizerError::Denied)
    );
}

#[tokio::test]
async fn lookup_failure_is_propagated() {
    let store = FakeSecretStore::with_result(Err(SecretStoreError::NotFound(TOKEN_PATH.to_string())));
    let authorizer = authorizer(store, MatchStrategy::List);

    let err = authorizer
        .authorize(&AuthorizationRequest::new("secret123", METHOD_ARN))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        AuthorizerError::UpstreamLookup(SecretStoreError::NotFound(TOKEN_PATH.to_string()))
    );
}

#[tokio::test]
async fn reads_the_configured_parameter_with_decryption_on_every_call() {
    let authorizer = authorizer(FakeSecretStore::with_value("secret123"), MatchStrategy::List);
    let request = AuthorizationRequest::new("secret123", METHOD_ARN);

    let first = authorizer.authorize(&request).await;
    let second = authorizer.authorize(&request).await;

    assert_eq!(first, second);
    assert_eq!(authorizer.store().reads.load(Ordering::SeqCst), 2);
    assert_eq!(
        *authorizer.store().last_call.lock().unwrap(),
        Some((TOKEN_PATH.to_string(), true))
    );
}

#[tokio::test]
async fn rotated_secret_takes_effect_immediately() {
    let authorizer = authorizer(FakeSecretStore::with_value("old"), MatchStrategy::List);
    let request = AuthorizationRequest::new("old", METHOD_ARN);
    assert!(authorizer.authorize(&request).await.is_ok());

    authorizer.store().set_value("new");

    assert_eq!(authorizer.authorize(&request).await, Err(AuthorizerError::Denied));
}

#[tokio::test]
async fn handler_reports_denial_as_invalid_token() {
    let authorizer = authorizer(FakeSecretStore::with_value("secret123"), MatchStrategy::List);

    let err = handle_request(&authorizer, AuthorizationRequest::new("wrong", METHOD_ARN))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid token");
}

#[tokio::test]
async fn handler_returns_gateway_response_on_success() {
    let authorizer = authorizer(FakeSecretStore::with_value("secret123"), MatchStrategy::List);

    let response = handle_request(&authorizer, AuthorizationRequest::new("secret123", METHOD_ARN))
        .await
        .unwrap();

    let value = serde_json::to_value(response).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "principalId": "buildkite",
            "policyDocument": {
                "Version": "2012-10-17",
                "Statement": [{
                    "Action": "execute-api:Invoke",
                    "Effect": "Allow",
                    "Resource": METHOD_ARN,
                }],
            },
        })
    );
}
