use crate::messages::{ALLOW_EFFECT, INVOKE_ACTION, POLICY_VERSION};
use serde::{Deserialize, Serialize};

/// An IAM policy document handed back to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    /// The policy language version, always [`POLICY_VERSION`].
    pub version: String,
    /// The statements granted by this policy.
    pub statement: Vec<PolicyStatement>,
}

/// A single permission grant within a [`PolicyDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyStatement {
    pub action: String,
    pub effect: String,
    pub resource: String,
}

impl PolicyDocument {
    /// Create a policy that allows invoking exactly the given method ARN.
    pub fn allow_invoke(method_arn: &str) -> Self {
        Self {
            version: POLICY_VERSION.to_string(),
            statement: vec![PolicyStatement {
                action: INVOKE_ACTION.to_string(),
                effect: ALLOW_EFFECT.to_string(),
                resource: method_arn.to_string(),
            }],
        }
    }
}
