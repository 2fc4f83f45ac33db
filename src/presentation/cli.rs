//! Command Line Interface
//!
//! Argument definitions and output rendering for the bootstrap binary.

use std::io::Write;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::application::services::BootstrapReport;
use crate::config::Settings;
use crate::domain::services::ScenarioSuite;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "api-test-bootstrap",
    version,
    about = "Prepare authentication headers and environment metadata for an API test run"
)]
pub struct Cli {
    /// Deployment profile (overrides `BOOTSTRAP_PROFILE`).
    #[arg(long, global = true, value_name = "NAME")]
    pub profile: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long, action = ArgAction::SetTrue, global = true)]
    pub log_json: bool,

    /// Selected subcommand; defaults to `setup`.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve credentials and write the auth artifact and environment descriptor.
    Setup(SetupCommand),
    /// Print the scenario plan of the active profile.
    Scenarios(ScenariosCommand),
}

/// Options for the `setup` command.
#[derive(Args, Debug, Clone, Default)]
pub struct SetupCommand {
    /// Auth artifact path (overrides `output.auth_file`).
    #[arg(long, value_name = "PATH")]
    pub auth_file: Option<PathBuf>,

    /// Results directory for `environment.properties` (overrides `output.results_dir`).
    #[arg(long, value_name = "DIR")]
    pub results_dir: Option<PathBuf>,

    /// Validate and print the artifacts without writing them.
    #[arg(long, action = ArgAction::SetTrue)]
    pub dry_run: bool,
}

/// Options for the `scenarios` command.
#[derive(Args, Debug, Clone, Default)]
pub struct ScenariosCommand {
    /// Print the plan as JSON instead of an indented outline.
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,
}

impl Cli {
    /// The selected command, with `setup` as the default.
    pub fn command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Setup(SetupCommand::default()))
    }

    /// Apply global and command-level overrides to loaded settings.
    pub fn apply_overrides(&self, mut settings: Settings) -> Settings {
        if let Some(profile) = &self.profile {
            settings.profile = profile.clone();
        }
        if let Some(Commands::Setup(cmd)) = &self.command {
            if let Some(path) = &cmd.auth_file {
                settings.output.auth_file = path.clone();
            }
            if let Some(dir) = &cmd.results_dir {
                settings.output.results_dir = dir.clone();
            }
        }
        settings
    }
}

/// Print the outcome of `setup` to `out`.
pub fn render_report(out: &mut impl Write, report: &BootstrapReport) -> std::io::Result<()> {
    writeln!(out, "profile:      {}", report.profile)?;
    writeln!(out, "base url:     {}", report.base_url)?;
    writeln!(out, "headers:      {}", report.headers.join(", "))?;
    writeln!(out, "auth file:    {}", report.auth_file.display())?;
    writeln!(out, "environment:  {}", report.descriptor_file.display())
}

/// Print a scenario plan as an outline or as JSON.
pub fn render_scenarios(
    out: &mut impl Write,
    suites: &[ScenarioSuite],
    json: bool,
) -> std::io::Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(suites).map_err(std::io::Error::other)?;
        return writeln!(out, "{}", rendered);
    }

    for suite in suites {
        writeln!(out, "{}", suite.title)?;
        for case in &suite.cases {
            writeln!(out, "  {}", case.title())?;
        }
    }
    Ok(())
}
