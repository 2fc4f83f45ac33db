//! Credential Service
//!
//! Derives the authentication header set from an environment snapshot.
//!
//! Evaluation order:
//!
//! 1. `API_KEY_VALUE` -> `api_key: <value>`
//! 2. `OAUTH_ACCESS_TOKEN` -> `Authorization: Bearer <token>`
//! 3. `BASIC_AUTH_USERNAME` + `BASIC_AUTH_PASSWORD` -> `Authorization: Basic <base64>`
//!
//! Only schemes recognized by the active profile are evaluated. Rules 2 and 3
//! share the `Authorization` header, so configuring both is rejected.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::domain::entities::{
    AuthConfiguration, DeploymentProfile, API_KEY_HEADER, AUTHORIZATION_HEADER,
};
use crate::domain::value_objects::{
    AuthScheme, EnvSnapshot, API_KEY_VALUE, BASIC_AUTH_PASSWORD, BASIC_AUTH_USERNAME,
    OAUTH_ACCESS_TOKEN,
};
use crate::shared::error::ConfigurationError;

/// Build the header set for `profile` from `env`.
///
/// # Errors
///
/// - [`ConfigurationError::IncompleteBasicCredentials`] when only one of the
///   Basic pair is set
/// - [`ConfigurationError::ConflictingAuthorization`] when both a bearer token
///   and Basic credentials are set
/// - [`ConfigurationError::NoCredentials`] when no header could be derived
pub fn build_auth_configuration(
    env: &EnvSnapshot,
    profile: &DeploymentProfile,
) -> Result<AuthConfiguration, ConfigurationError> {
    let mut config = AuthConfiguration::default();
    let mut authorization_source: Option<&'static str> = None;

    for scheme in AuthScheme::ALL {
        if !profile.recognizes(scheme) {
            if scheme.env_vars().iter().any(|var| env.is_set(var)) {
                tracing::debug!(
                    scheme = %scheme,
                    profile = %profile.name,
                    "Ignoring credentials for scheme not used by profile"
                );
            }
            continue;
        }

        match scheme {
            AuthScheme::ApiKey => {
                if let Some(key) = env.get(API_KEY_VALUE) {
                    config.insert(API_KEY_HEADER, key);
                }
            }
            AuthScheme::Bearer => {
                if let Some(token) = env.get(OAUTH_ACCESS_TOKEN) {
                    config.insert(AUTHORIZATION_HEADER, format!("Bearer {}", token));
                    authorization_source = Some(OAUTH_ACCESS_TOKEN);
                }
            }
            AuthScheme::Basic => {
                let username = env.get(BASIC_AUTH_USERNAME);
                let password = env.get(BASIC_AUTH_PASSWORD);
                match (username, password) {
                    (Some(username), Some(password)) => {
                        if let Some(first) = authorization_source {
                            return Err(ConfigurationError::ConflictingAuthorization {
                                first,
                                second: BASIC_AUTH_USERNAME,
                            });
                        }
                        config.insert(AUTHORIZATION_HEADER, basic_authorization(username, password));
                    }
                    (None, None) => {}
                    _ => {
                        return Err(ConfigurationError::IncompleteBasicCredentials {
                            username_var: BASIC_AUTH_USERNAME,
                            password_var: BASIC_AUTH_PASSWORD,
                        });
                    }
                }
            }
        }
    }

    if config.is_empty() {
        return Err(ConfigurationError::NoCredentials {
            expected: profile.expected_env_hint(),
        });
    }

    Ok(config)
}

/// `Basic <base64(username:password)>`
pub fn basic_authorization(username: &str, password: &str) -> String {
    let credentials = STANDARD.encode(format!("{}:{}", username, password));
    format!("Basic {}", credentials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn env(pairs: &[(&str, &str)]) -> EnvSnapshot {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_api_key_only() {
        let config =
            build_auth_configuration(&env(&[(API_KEY_VALUE, "X")]), &DeploymentProfile::petstore())
                .unwrap();
        let expected: AuthConfiguration = [("api_key", "X")].into_iter().collect();
        assert_eq!(config, expected);
    }

    #[test]
    fn test_bearer_only() {
        let config = build_auth_configuration(
            &env(&[(OAUTH_ACCESS_TOKEN, "T")]),
            &DeploymentProfile::petstore(),
        )
        .unwrap();
        let expected: AuthConfiguration = [("Authorization", "Bearer T")].into_iter().collect();
        assert_eq!(config, expected);
    }

    #[test]
    fn test_basic_pair() {
        let config = build_auth_configuration(
            &env(&[(BASIC_AUTH_USERNAME, "u"), (BASIC_AUTH_PASSWORD, "p")]),
            &DeploymentProfile::petstore(),
        )
        .unwrap();
        // base64("u:p") == "dTpw"
        assert_eq!(config.get("Authorization"), Some("Basic dTpw"));
        assert_eq!(config.len(), 1);
    }

    #[test]
    fn test_api_key_and_bearer_coexist() {
        let config = build_auth_configuration(
            &env(&[(API_KEY_VALUE, "k"), (OAUTH_ACCESS_TOKEN, "t")]),
            &DeploymentProfile::petstore(),
        )
        .unwrap();
        assert_eq!(config.header_names(), vec!["Authorization", "api_key"]);
    }

    #[test_case(&[(BASIC_AUTH_USERNAME, "bob")] ; "username only")]
    #[test_case(&[(BASIC_AUTH_PASSWORD, "secret")] ; "password only")]
    #[test_case(&[(API_KEY_VALUE, "k"), (BASIC_AUTH_USERNAME, "bob")] ; "username with api key")]
    fn test_incomplete_basic_fails(pairs: &[(&str, &str)]) {
        let err = build_auth_configuration(&env(pairs), &DeploymentProfile::petstore()).unwrap_err();
        assert!(matches!(err, ConfigurationError::IncompleteBasicCredentials { .. }));
    }

    #[test]
    fn test_bearer_and_basic_conflict() {
        let err = build_auth_configuration(
            &env(&[
                (OAUTH_ACCESS_TOKEN, "t"),
                (BASIC_AUTH_USERNAME, "u"),
                (BASIC_AUTH_PASSWORD, "p"),
            ]),
            &DeploymentProfile::petstore(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::ConflictingAuthorization {
                first: OAUTH_ACCESS_TOKEN,
                second: BASIC_AUTH_USERNAME,
            }
        );
    }

    #[test]
    fn test_nothing_set_fails() {
        let err = build_auth_configuration(&EnvSnapshot::default(), &DeploymentProfile::petstore())
            .unwrap_err();
        assert!(err.to_string().contains("API_KEY_VALUE, OAUTH_ACCESS_TOKEN"));
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let err = build_auth_configuration(
            &env(&[(API_KEY_VALUE, ""), (OAUTH_ACCESS_TOKEN, "")]),
            &DeploymentProfile::petstore(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigurationError::NoCredentials { .. }));
    }

    #[test]
    fn test_unrecognized_scheme_is_ignored() {
        // The objects profile has no bearer scheme.
        let err = build_auth_configuration(
            &env(&[(OAUTH_ACCESS_TOKEN, "t")]),
            &DeploymentProfile::objects(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::NoCredentials {
                expected: "API_KEY_VALUE or BASIC_AUTH_USERNAME/PASSWORD".into(),
            }
        );
    }

    #[test]
    fn test_api_key_is_verbatim() {
        let config = build_auth_configuration(
            &env(&[(API_KEY_VALUE, "a b+c/=")]),
            &DeploymentProfile::objects(),
        )
        .unwrap();
        assert_eq!(config.get("api_key"), Some("a b+c/="));
    }

    #[test]
    fn test_basic_authorization_encoding() {
        assert_eq!(basic_authorization("bob", "hunter2"), "Basic Ym9iOmh1bnRlcjI=");
    }
}
