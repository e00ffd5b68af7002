use serde::{Deserialize, Serialize};

/// Represents the event sent by API Gateway to a token authorizer.
///
/// Any other fields the gateway includes are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationRequest {
    /// The caller-supplied token, compared verbatim.
    pub authorization_token: String,
    /// The ARN of the method being invoked.
    pub method_arn: String,
    /// The authorizer type, `TOKEN` for token authorizers.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl AuthorizationRequest {
    pub fn new(authorization_token: impl Into<String>, method_arn: impl Into<String>) -> Self {
        Self {
            authorization_token: authorization_token.into(),
            method_arn: method_arn.into(),
            kind: None,
        }
    }
}
