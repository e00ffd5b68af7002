/// Returned to the gateway when the supplied token is not one of the expected tokens.
pub const INVALID_TOKEN_RESPONSE: &str = "Invalid token";

/// Principal every successful authorization is issued for.
pub const PRINCIPAL_ID: &str = "buildkite";

pub const POLICY_VERSION: &str = "2012-10-17";
pub const INVOKE_ACTION: &str = "execute-api:Invoke";
pub const ALLOW_EFFECT: &str = "Allow";
