//! Application Services
//!
//! ## Available Services
//!
//! - **BootstrapService**: Credential resolution and artifact writing
//! - **scenario_catalog**: Endpoint catalogs of the built-in profiles

pub mod bootstrap_service;
pub mod scenario_catalog;

pub use bootstrap_service::{
    BootstrapPlan, BootstrapReport, BootstrapService, BootstrapServiceImpl, BOOTSTRAP_RUNTIME,
};
