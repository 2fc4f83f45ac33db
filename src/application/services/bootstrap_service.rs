//! Bootstrap Service
//!
//! Runs the setup phase: derive credentials, describe the environment, then
//! write both artifacts. Everything is built and validated before the first
//! write, so a configuration error leaves the file system untouched.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::entities::{
    ArtifactStore, AuthConfiguration, DeploymentProfile, DescriptorFields, EnvironmentDescriptor,
};
use crate::domain::services::build_auth_configuration;
use crate::domain::value_objects::{EnvSnapshot, BASE_URL, NODE_VERSION};
use crate::shared::error::Result;

/// Reported runtime when the test runner does not provide `NODE_VERSION`.
pub const BOOTSTRAP_RUNTIME: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Bootstrap service trait for dependency injection
pub trait BootstrapService {
    /// Build both artifacts in memory without writing anything.
    fn prepare(&self, env: &EnvSnapshot) -> Result<BootstrapPlan>;

    /// Prepare and write both artifacts.
    fn run(&self, env: &EnvSnapshot) -> Result<BootstrapReport>;
}

/// Fully validated artifacts, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapPlan {
    pub profile: String,
    pub base_url: String,
    pub auth: AuthConfiguration,
    pub descriptor: EnvironmentDescriptor,
}

/// Outcome of a successful run. Contains no credential values.
#[derive(Debug, Clone, Serialize)]
pub struct BootstrapReport {
    pub profile: String,
    pub base_url: String,
    pub headers: Vec<String>,
    pub auth_file: PathBuf,
    pub descriptor_file: PathBuf,
}

/// BootstrapService implementation
pub struct BootstrapServiceImpl<S>
where
    S: ArtifactStore,
{
    store: S,
    profile: DeploymentProfile,
    os_description: String,
}

impl<S> BootstrapServiceImpl<S>
where
    S: ArtifactStore,
{
    /// Create a new BootstrapServiceImpl
    ///
    /// `os_description` is reported verbatim as the descriptor's `OS` entry.
    pub fn new(store: S, profile: DeploymentProfile, os_description: impl Into<String>) -> Self {
        Self {
            store,
            profile,
            os_description: os_description.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn base_url<'a>(&'a self, env: &'a EnvSnapshot) -> &'a str {
        env.get(BASE_URL)
            .unwrap_or(self.profile.default_base_url.as_str())
    }
}

impl<S> BootstrapService for BootstrapServiceImpl<S>
where
    S: ArtifactStore,
{
    fn prepare(&self, env: &EnvSnapshot) -> Result<BootstrapPlan> {
        let auth = build_auth_configuration(env, &self.profile)?;
        let base_url = self.base_url(env);

        let descriptor = EnvironmentDescriptor::new(DescriptorFields {
            os: &self.os_description,
            runtime_version: env.get(NODE_VERSION).unwrap_or(BOOTSTRAP_RUNTIME),
            base_url,
            browser: &self.profile.browser_label,
            project: &self.profile.project,
            organization: &self.profile.organization,
        });

        Ok(BootstrapPlan {
            profile: self.profile.name.clone(),
            base_url: base_url.to_string(),
            auth,
            descriptor,
        })
    }

    fn run(&self, env: &EnvSnapshot) -> Result<BootstrapReport> {
        let plan = self.prepare(env)?;
        tracing::info!(
            profile = %plan.profile,
            base_url = %plan.base_url,
            headers = ?plan.auth.header_names(),
            "Credentials resolved"
        );

        let auth_file = self.store.save_auth(&plan.auth)?;
        let descriptor_file = self.store.save_descriptor(&plan.descriptor)?;

        Ok(BootstrapReport {
            profile: plan.profile,
            base_url: plan.base_url,
            headers: plan.auth.header_names().into_iter().map(String::from).collect(),
            auth_file,
            descriptor_file,
        })
    }
}
