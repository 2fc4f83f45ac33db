//! Bootstrap settings and configuration structures.

use std::collections::HashMap;
use std::path::PathBuf;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::entities::{DeploymentProfile, DEFAULT_BROWSER_LABEL, DEFAULT_ORGANIZATION};
use crate::domain::value_objects::AuthScheme;
use crate::shared::error::BootstrapError;

/// Default auth artifact location, relative to the working directory.
pub const DEFAULT_AUTH_FILE: &str = "auth.json";

/// Default report results directory, relative to the working directory.
pub const DEFAULT_RESULTS_DIR: &str = "allure-results";

/// Root configuration structure containing all bootstrap settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Active deployment profile name (e.g., "petstore")
    pub profile: String,

    /// Artifact locations
    pub output: OutputSettings,

    /// Per-profile overrides, keyed by profile name
    #[serde(default)]
    pub profiles: HashMap<String, ProfileOverrides>,

    /// Current environment (development, ci, ...)
    pub environment: String,
}

/// Where the setup artifacts are written.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    /// Auth artifact path
    pub auth_file: PathBuf,

    /// Directory receiving `environment.properties`
    pub results_dir: PathBuf,
}

/// Optional overrides for a profile.
///
/// A name that is not a built-in profile defines a new one; it must then
/// provide at least `project` and `default_base_url`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileOverrides {
    pub project: Option<String>,
    pub organization: Option<String>,
    pub default_base_url: Option<String>,
    pub browser_label: Option<String>,
    pub schemes: Option<Vec<AuthScheme>>,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. Built-in defaults
    /// 2. config/default.toml (base configuration)
    /// 3. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 4. `APP__`-prefixed environment variables
    /// 5. `BOOTSTRAP_PROFILE` (highest priority)
    ///
    /// A `.env` file in the working directory is loaded first if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed, or
    /// if the selected profile cannot be resolved.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_unvalidated().and_then(Self::validated)
    }

    /// Same sources as [`Settings::load`], without profile validation.
    ///
    /// Callers applying further overrides (e.g. `--profile`) must call
    /// [`Settings::validated`] afterwards.
    pub fn load_unvalidated() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Self::defaults(&environment)?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__OUTPUT__AUTH_FILE=auth.json -> output.auth_file
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("profile", std::env::var("BOOTSTRAP_PROFILE").ok())?
            .build()?
            .try_deserialize()
    }

    /// Builder pre-populated with the built-in defaults.
    pub fn defaults(environment: &str) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("environment", environment)?
            .set_default("profile", "petstore")?
            .set_default("output.auth_file", DEFAULT_AUTH_FILE)?
            .set_default("output.results_dir", DEFAULT_RESULTS_DIR)
    }

    /// Reject settings whose profile cannot be resolved or recognizes no
    /// credential scheme.
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.resolve_profile()
            .map_err(|e| ConfigError::Message(e.to_string()))?;
        Ok(self)
    }

    /// Resolve the active profile, applying any configured overrides.
    pub fn resolve_profile(&self) -> Result<DeploymentProfile, BootstrapError> {
        self.resolve_named_profile(&self.profile)
    }

    /// Resolve a profile by name, applying any configured overrides.
    pub fn resolve_named_profile(&self, name: &str) -> Result<DeploymentProfile, BootstrapError> {
        let overrides = self
            .profiles
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, o)| o);

        let profile = match (DeploymentProfile::find_builtin(name), overrides) {
            (Some(profile), None) => profile,
            (Some(profile), Some(overrides)) => overrides.apply(profile),
            (None, Some(overrides)) => overrides
                .define(name)
                .ok_or_else(|| BootstrapError::UnknownProfile(name.to_string()))?,
            (None, None) => return Err(BootstrapError::UnknownProfile(name.to_string())),
        };

        if profile.schemes.is_empty() {
            return Err(BootstrapError::ProfileWithoutSchemes(profile.name));
        }
        Ok(profile)
    }
}

impl ProfileOverrides {
    fn apply(&self, mut profile: DeploymentProfile) -> DeploymentProfile {
        if let Some(project) = &self.project {
            profile.project = project.clone();
        }
        if let Some(organization) = &self.organization {
            profile.organization = organization.clone();
        }
        if let Some(url) = &self.default_base_url {
            profile.default_base_url = url.clone();
        }
        if let Some(label) = &self.browser_label {
            profile.browser_label = label.clone();
        }
        if let Some(schemes) = &self.schemes {
            profile.schemes = schemes.clone();
        }
        profile
    }

    fn define(&self, name: &str) -> Option<DeploymentProfile> {
        Some(DeploymentProfile {
            name: name.to_string(),
            project: self.project.clone()?,
            organization: self
                .organization
                .clone()
                .unwrap_or_else(|| DEFAULT_ORGANIZATION.to_string()),
            default_base_url: self.default_base_url.clone()?,
            browser_label: self
                .browser_label
                .clone()
                .unwrap_or_else(|| DEFAULT_BROWSER_LABEL.to_string()),
            schemes: self
                .schemes
                .clone()
                .unwrap_or_else(|| AuthScheme::ALL.to_vec()),
        })
    }
}
