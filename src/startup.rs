//! Application Startup
//!
//! Wires settings, the artifact store, and the bootstrap service together.

use std::io::Write;

use anyhow::{Context, Result};

use crate::application::services::{scenario_catalog, BootstrapService, BootstrapServiceImpl};
use crate::config::Settings;
use crate::domain::entities::DeploymentProfile;
use crate::domain::value_objects::EnvSnapshot;
use crate::infrastructure::host::HostInfo;
use crate::infrastructure::storage::FsArtifactStore;
use crate::presentation::cli::{self, Commands, ScenariosCommand, SetupCommand};

/// Application instance
pub struct Application {
    profile: DeploymentProfile,
    service: BootstrapServiceImpl<FsArtifactStore>,
}

impl Application {
    /// Build the application from settings
    pub fn build(settings: Settings) -> Result<Self> {
        let profile = settings
            .resolve_profile()
            .context("Failed to resolve deployment profile")?;

        let store = FsArtifactStore::new(
            settings.output.auth_file.clone(),
            settings.output.results_dir.clone(),
        );
        let host = HostInfo::detect();
        tracing::debug!(os = %host.describe(), "Host detected");

        let service = BootstrapServiceImpl::new(store, profile.clone(), host.describe());

        Ok(Self {
            profile,
            service,
        })
    }

    /// Execute a command against `env`, writing human output to `out`.
    pub fn run(&self, command: &Commands, env: &EnvSnapshot, out: &mut impl Write) -> Result<()> {
        match command {
            Commands::Setup(cmd) => self.setup(cmd, env, out),
            Commands::Scenarios(cmd) => self.scenarios(cmd, out),
        }
    }

    fn setup(&self, cmd: &SetupCommand, env: &EnvSnapshot, out: &mut impl Write) -> Result<()> {
        if cmd.dry_run {
            let plan = self.service.prepare(env)?;
            tracing::info!(profile = %plan.profile, "Dry run, nothing written");
            // header values are credentials; only names are shown
            writeln!(out, "headers: {}", plan.auth.header_names().join(", "))?;
            writeln!(out, "{}", plan.descriptor)?;
            return Ok(());
        }

        let report = self.service.run(env)?;
        tracing::info!(
            auth_file = %report.auth_file.display(),
            descriptor_file = %report.descriptor_file.display(),
            "Global setup complete"
        );
        cli::render_report(out, &report)?;
        Ok(())
    }

    fn scenarios(&self, cmd: &ScenariosCommand, out: &mut impl Write) -> Result<()> {
        let endpoints = scenario_catalog::endpoints_for(&self.profile.name).with_context(|| {
            format!("No scenario catalog for profile '{}'", self.profile.name)
        })?;
        let suites = scenario_catalog::plan(&endpoints);
        tracing::debug!(suites = suites.len(), "Scenario plan built");

        cli::render_scenarios(out, &suites, cmd.json)?;
        Ok(())
    }
}
