use crate::{messages::PRINCIPAL_ID, models::policy::PolicyDocument};
use serde::{Deserialize, Serialize};

/// The response for a successful authorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizerResponse {
    pub principal_id: String,
    pub policy_document: PolicyDocument,
}

impl AuthorizerResponse {
    /// Build the response granting invoke permission on `method_arn`.
    pub fn allow(method_arn: &str) -> Self {
        AuthorizerResponse {
            principal_id: PRINCIPAL_ID.to_string(),
            policy_document: PolicyDocument::allow_invoke(method_arn),
        }
    }
}
