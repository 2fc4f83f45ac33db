//! # API Test Bootstrap
//!
//! Global setup for an end-to-end API test run.
//!
//! This is the application entry point that:
//! - Initializes tracing/logging
//! - Loads configuration (.env, config files, environment)
//! - Resolves credentials into the auth artifact
//! - Writes the environment descriptor for the report viewer

use anyhow::Result;
use clap::Parser;
use tracing::info;

use api_test_bootstrap::config::Settings;
use api_test_bootstrap::domain::value_objects::EnvSnapshot;
use api_test_bootstrap::presentation::cli::Cli;
use api_test_bootstrap::startup::Application;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber for structured logging
    api_test_bootstrap::telemetry::init_tracing(cli.log_json);

    // Load configuration; this also loads .env into the process environment.
    // Validation waits for the CLI overrides so `--profile` can replace a bad one.
    let settings = cli
        .apply_overrides(Settings::load_unvalidated()?)
        .validated()?;
    info!(
        profile = %settings.profile,
        environment = %settings.environment,
        "Configuration loaded"
    );

    // Snapshot after .env has been applied
    let env = EnvSnapshot::from_process();

    let application = Application::build(settings)?;
    let stdout = std::io::stdout();
    application.run(&cli.command(), &env, &mut stdout.lock())?;

    Ok(())
}
