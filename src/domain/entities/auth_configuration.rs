//! Authentication header set and its persisted artifact form.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "api_key";

/// Standard HTTP authorization header.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// HTTP headers attached to every test request.
///
/// Built once by the credential service and never mutated afterwards. Keys are
/// kept sorted so the serialized artifact is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthConfiguration {
    headers: BTreeMap<String, String>,
}

impl AuthConfiguration {
    pub(crate) fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }

    /// Header value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Header names, without values. Safe to log.
    pub fn header_names(&self) -> Vec<&str> {
        self.headers.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Wrap into the artifact shape consumed by the test runner.
    pub fn into_storage_state(self) -> StorageState {
        StorageState {
            extra_http_headers: self,
        }
    }
}

impl<K, V> FromIterator<(K, V)> for AuthConfiguration
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            headers: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// The auth artifact: `{ "extraHTTPHeaders": { ... } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageState {
    #[serde(rename = "extraHTTPHeaders")]
    pub extra_http_headers: AuthConfiguration,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_storage_state_shape() {
        let config: AuthConfiguration = [(API_KEY_HEADER, "abc123")].into_iter().collect();
        let json = serde_json::to_string(&config.into_storage_state()).unwrap();
        assert_eq!(json, r#"{"extraHTTPHeaders":{"api_key":"abc123"}}"#);
    }

    #[test]
    fn test_header_names_are_sorted() {
        let config: AuthConfiguration = [(AUTHORIZATION_HEADER, "Bearer t"), (API_KEY_HEADER, "k")]
            .into_iter()
            .collect();
        assert_eq!(config.header_names(), vec!["Authorization", "api_key"]);
    }
}
