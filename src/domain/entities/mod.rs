//! # Domain Entities
//!
//! - **AuthConfiguration**: Header set persisted as the auth artifact
//! - **EnvironmentDescriptor**: Key-value record for the report viewer
//! - **DeploymentProfile**: Per-suite bootstrap variant
//! - **ArtifactStore**: Where the artifacts end up

mod artifact_store;
mod auth_configuration;
mod environment_descriptor;
mod profile;

pub use artifact_store::*;
pub use auth_configuration::*;
pub use environment_descriptor::*;
pub use profile::*;
