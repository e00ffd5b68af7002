use crate::{
    api::{requests::AuthorizationRequest, responses::AuthorizerResponse},
    authorizer::TokenAuthorizer,
    storage::SecretStore,
};

/// Run a single invocation, converting failures into errors the Lambda runtime reports.
///
/// A rejected token surfaces with the message `Invalid token`, lookup failures keep
/// their own message.
pub async fn handle_request<S: SecretStore>(
    authorizer: &TokenAuthorizer<S>,
    request: AuthorizationRequest,
) -> Result<AuthorizerResponse, lambda_runtime::Error> {
    Ok(authorizer.authorize(&request).await?)
}
