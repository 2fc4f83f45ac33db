//! Immutable snapshot of environment variables.
//!
//! Credential derivation never reads the process environment directly; it
//! receives an [`EnvSnapshot`] so that it stays a pure function of its input.

use std::collections::BTreeMap;
use std::ffi::OsString;

/// Environment variable holding the API key header value.
pub const API_KEY_VALUE: &str = "API_KEY_VALUE";

/// Environment variable holding the OAuth access token.
pub const OAUTH_ACCESS_TOKEN: &str = "OAUTH_ACCESS_TOKEN";

/// Environment variable holding the HTTP Basic username.
pub const BASIC_AUTH_USERNAME: &str = "BASIC_AUTH_USERNAME";

/// Environment variable holding the HTTP Basic password.
pub const BASIC_AUTH_PASSWORD: &str = "BASIC_AUTH_PASSWORD";

/// Environment variable overriding the profile's default base URL.
pub const BASE_URL: &str = "BASE_URL";

/// Environment variable carrying the test runner's runtime version.
pub const NODE_VERSION: &str = "NODE_VERSION";

/// Variables read by the bootstrap; these are reported when unreadable.
pub const RECOGNIZED_VARS: [&str; 6] = [
    API_KEY_VALUE,
    OAUTH_ACCESS_TOKEN,
    BASIC_AUTH_USERNAME,
    BASIC_AUTH_PASSWORD,
    BASE_URL,
    NODE_VERSION,
];

/// A read-only mapping of environment variable names to values.
///
/// Empty values are dropped on construction, so `FOO=` behaves like an unset
/// variable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid unicode are skipped; a
    /// warning names any skipped variable the bootstrap reads.
    pub fn from_process() -> Self {
        Self::from_os_vars(std::env::vars_os()).0
    }

    /// Build from raw OS pairs. Also returns the recognized variables that
    /// were skipped because their value is not valid unicode.
    fn from_os_vars(vars: impl IntoIterator<Item = (OsString, OsString)>) -> (Self, Vec<String>) {
        let mut skipped = Vec::new();
        let snapshot = vars
            .into_iter()
            .filter_map(|(key, value)| {
                let key = key.into_string().ok()?;
                match value.into_string() {
                    Ok(value) => Some((key, value)),
                    Err(_) => {
                        if RECOGNIZED_VARS.contains(&key.as_str()) {
                            tracing::warn!(
                                variable = %key,
                                "Ignoring environment variable with non-unicode value"
                            );
                            skipped.push(key);
                        }
                        None
                    }
                }
            })
            .collect();
        (snapshot, skipped)
    }

    /// Look up a variable. Returns `None` for unset and empty variables.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Check whether a variable is set to a non-empty value.
    pub fn is_set(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(_, v)| !v.is_empty())
            .collect();
        Self { vars }
    }
}
