//! Supported authentication schemes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::env_snapshot::{API_KEY_VALUE, BASIC_AUTH_PASSWORD, BASIC_AUTH_USERNAME, OAUTH_ACCESS_TOKEN};

/// One way of attaching credentials to outgoing test requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthScheme {
    /// `api_key: <value>` header
    ApiKey,
    /// `Authorization: Bearer <token>` header (OAuth2 access token)
    Bearer,
    /// `Authorization: Basic <base64(user:password)>` header
    Basic,
}

impl AuthScheme {
    /// All schemes in evaluation order.
    pub const ALL: [AuthScheme; 3] = [AuthScheme::ApiKey, AuthScheme::Bearer, AuthScheme::Basic];

    /// Environment variables this scheme reads.
    pub fn env_vars(&self) -> &'static [&'static str] {
        match self {
            AuthScheme::ApiKey => &[API_KEY_VALUE],
            AuthScheme::Bearer => &[OAUTH_ACCESS_TOKEN],
            AuthScheme::Basic => &[BASIC_AUTH_USERNAME, BASIC_AUTH_PASSWORD],
        }
    }

    /// Human readable list of the variables, as used in error messages.
    pub fn env_hint(&self) -> String {
        match self {
            AuthScheme::Basic => "BASIC_AUTH_USERNAME/PASSWORD".to_string(),
            _ => self.env_vars().join(", "),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthScheme::ApiKey => "api_key",
            AuthScheme::Bearer => "bearer",
            AuthScheme::Basic => "basic",
        }
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&AuthScheme::ApiKey).unwrap();
        assert_eq!(json, "\"api_key\"");
        let scheme: AuthScheme = serde_json::from_str("\"basic\"").unwrap();
        assert_eq!(scheme, AuthScheme::Basic);
    }

    #[test]
    fn test_basic_hint() {
        assert_eq!(AuthScheme::Basic.env_hint(), "BASIC_AUTH_USERNAME/PASSWORD");
        assert_eq!(AuthScheme::Bearer.env_hint(), "OAUTH_ACCESS_TOKEN");
    }
}
