//! Domain Services
//!
//! - **credential_service**: Derives authentication headers from the environment
//! - **scenario_matrix**: Expands endpoints into media-type x status scenarios

pub mod credential_service;
pub mod scenario_matrix;

pub use credential_service::{basic_authorization, build_auth_configuration};
pub use scenario_matrix::{
    expand, suite_title, DocumentedResponse, Endpoint, HttpMethod, Scenario, ScenarioSuite,
};
