//! Global Setup Tests

use api_test_bootstrap::infrastructure::storage::load_auth_state;
use api_test_bootstrap::presentation::cli::{Commands, SetupCommand};
use api_test_bootstrap::shared::error::{BootstrapError, ConfigurationError};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

use crate::common::{env, read, TestApp};

/// API key scenario produces the documented artifact
#[test]
fn test_api_key_artifact() {
    let app = TestApp::new("petstore");

    app.setup(&env(&[("API_KEY_VALUE", "abc123")])).unwrap();

    let artifact: serde_json::Value = serde_json::from_str(&read(&app.auth_file())).unwrap();
    assert_eq!(artifact, json!({ "extraHTTPHeaders": { "api_key": "abc123" } }));
}

#[test_case(&[("OAUTH_ACCESS_TOKEN", "T")], "Authorization", "Bearer T" ; "bearer token")]
#[test_case(&[("BASIC_AUTH_USERNAME", "u"), ("BASIC_AUTH_PASSWORD", "p")], "Authorization", "Basic dTpw" ; "basic pair")]
#[test_case(&[("API_KEY_VALUE", "X")], "api_key", "X" ; "api key")]
fn test_single_scheme_artifact(pairs: &[(&str, &str)], header: &str, value: &str) {
    let app = TestApp::new("petstore");

    app.setup(&env(pairs)).unwrap();

    let headers = load_auth_state(&app.auth_file()).unwrap();
    assert_eq!(headers.len(), 1);
    assert_eq!(headers.get(header), Some(value));
}

/// Partial basic credentials abort before any file is written
#[test]
fn test_missing_password_writes_nothing() {
    let app = TestApp::new("petstore");

    let err = app.setup(&env(&[("BASIC_AUTH_USERNAME", "bob")])).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<BootstrapError>(),
        Some(BootstrapError::Configuration(
            ConfigurationError::IncompleteBasicCredentials { .. }
        ))
    ));
    assert!(!app.auth_file().exists());
    assert!(!app.descriptor_file().exists());
}

#[test]
fn test_no_credentials_fails() {
    let app = TestApp::new("objects");

    let err = app.setup(&env(&[("BASE_URL", "http://x")])).unwrap_err();

    assert!(err
        .to_string()
        .contains("API_KEY_VALUE or BASIC_AUTH_USERNAME/PASSWORD"));
    assert!(!app.auth_file().exists());
}

/// Second run fully replaces the first artifact
#[test]
fn test_rerun_overwrites_artifact() {
    let app = TestApp::new("petstore");

    app.setup(&env(&[("API_KEY_VALUE", "first")])).unwrap();
    app.setup(&env(&[("OAUTH_ACCESS_TOKEN", "second")])).unwrap();

    let artifact: serde_json::Value = serde_json::from_str(&read(&app.auth_file())).unwrap();
    assert_eq!(
        artifact,
        json!({ "extraHTTPHeaders": { "Authorization": "Bearer second" } })
    );
}

#[test]
fn test_environment_descriptor_contents() {
    let app = TestApp::new("petstore");

    app.setup(&env(&[
        ("API_KEY_VALUE", "k"),
        ("BASE_URL", "https://petstore.example.com/api/v3"),
        ("NODE_VERSION", "v20.11.0"),
    ]))
    .unwrap();

    let properties = read(&app.descriptor_file());
    let lines: Vec<&str> = properties.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("OS="));
    assert_eq!(
        &lines[1..],
        &[
            "Node=v20.11.0",
            "BaseURL=https://petstore.example.com/api/v3",
            "Browser=Playwright Default",
            "Project=PetStore",
            "Organization=Accion Labs",
        ]
    );
    assert!(!properties.ends_with('\n'));
}

#[test]
fn test_objects_profile_default_base_url() {
    let app = TestApp::new("objects");

    app.setup(&env(&[("API_KEY_VALUE", "k")])).unwrap();

    let properties = read(&app.descriptor_file());
    assert!(properties.contains("BaseURL=https://api.restful-api.dev"));
    assert!(properties.contains("Project=Objects"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let app = TestApp::new("petstore");
    let command = Commands::Setup(SetupCommand {
        dry_run: true,
        ..SetupCommand::default()
    });

    let output = app.run(&command, &env(&[("API_KEY_VALUE", "secret-value")])).unwrap();

    assert!(output.starts_with("headers: api_key\n"));
    assert!(!output.contains("secret-value"));
    assert!(!app.auth_file().exists());
}

#[test]
fn test_setup_report_lists_artifacts() {
    let app = TestApp::new("petstore");

    let output = app.setup(&env(&[("API_KEY_VALUE", "k")])).unwrap();

    assert!(output.contains("profile:      petstore"));
    assert!(output.contains(&app.auth_file().display().to_string()));
    assert!(output.contains("environment.properties"));
}
