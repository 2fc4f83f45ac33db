//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::path::{Path, PathBuf};

use api_test_bootstrap::config::Settings;
use api_test_bootstrap::domain::value_objects::EnvSnapshot;
use api_test_bootstrap::presentation::cli::{Commands, SetupCommand};
use api_test_bootstrap::startup::Application;
use tempfile::TempDir;

/// Application writing into its own temporary directory
pub struct TestApp {
    pub app: Application,
    pub dir: TempDir,
}

impl TestApp {
    /// Create a new test application for `profile`
    pub fn new(profile: &str) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut settings: Settings = Settings::defaults("test")
            .expect("defaults")
            .build()
            .expect("build settings")
            .try_deserialize()
            .expect("deserialize settings");
        settings.profile = profile.to_string();
        settings.output.auth_file = dir.path().join("auth.json");
        settings.output.results_dir = dir.path().join("allure-results");

        let app = Application::build(settings).expect("build application");
        Self { app, dir }
    }

    pub fn auth_file(&self) -> PathBuf {
        self.dir.path().join("auth.json")
    }

    pub fn descriptor_file(&self) -> PathBuf {
        self.dir
            .path()
            .join("allure-results")
            .join("environment.properties")
    }

    /// Run `setup` and return its stdout
    pub fn setup(&self, env: &EnvSnapshot) -> anyhow::Result<String> {
        self.run(&Commands::Setup(SetupCommand::default()), env)
    }

    /// Run any command and return its stdout
    pub fn run(&self, command: &Commands, env: &EnvSnapshot) -> anyhow::Result<String> {
        let mut out = Vec::new();
        self.app.run(command, env, &mut out)?;
        Ok(String::from_utf8(out).expect("utf-8 output"))
    }
}

/// Build an environment snapshot from literal pairs
pub fn env(pairs: &[(&str, &str)]) -> EnvSnapshot {
    pairs.iter().copied().collect()
}

/// Read a file produced by a test run
pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("read artifact")
}
