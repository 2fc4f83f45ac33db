//! Scenario Plan Tests

use api_test_bootstrap::presentation::cli::{Commands, ScenariosCommand};
use pretty_assertions::assert_eq;

use crate::common::{env, TestApp};

#[test]
fn test_objects_outline() {
    let app = TestApp::new("objects");

    let output = app
        .run(&Commands::Scenarios(ScenariosCommand { json: false }), &env(&[]))
        .unwrap();

    let suites: Vec<&str> = output.lines().filter(|l| !l.starts_with("  ")).collect();
    assert_eq!(
        suites,
        vec![
            "/objects - GET → JSON",
            "/objects - POST JSON → JSON",
            "/objects/{id} - GET → JSON",
            "/objects/{id} - PUT JSON → JSON",
            "/objects/{id} - DELETE",
        ]
    );
    assert!(output.contains("  404 - Object not found\n"));
}

#[test]
fn test_petstore_json_plan() {
    let app = TestApp::new("petstore");

    let output = app
        .run(&Commands::Scenarios(ScenariosCommand { json: true }), &env(&[]))
        .unwrap();

    let plan: serde_json::Value = serde_json::from_str(&output).unwrap();
    let suites = plan.as_array().unwrap();
    assert_eq!(suites.len(), 30);
    assert_eq!(suites[0]["title"], "/pet - POST JSON → JSON");

    let first_case = &suites[0]["cases"][0];
    assert_eq!(first_case["method"], "POST");
    assert_eq!(first_case["request_type"], "json");
    assert_eq!(first_case["status"], 200);

    let last_case = &suites[0]["cases"][3];
    assert_eq!(last_case["status"], "default");
}

/// Scenario planning does not need credentials
#[test]
fn test_scenarios_without_credentials() {
    let app = TestApp::new("petstore");
    assert!(app
        .run(&Commands::Scenarios(ScenariosCommand::default()), &env(&[]))
        .is_ok());
}
