//! Storage Module
//!
//! File writers for the two setup artifacts, plus the reader used by the
//! consuming side of the auth artifact. Every write fully replaces the
//! previous file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::{
    ArtifactStore, AuthConfiguration, EnvironmentDescriptor, StorageState,
};
use crate::shared::error::{BootstrapError, Result};

/// [`ArtifactStore`] writing to the local file system.
#[derive(Debug, Clone)]
pub struct FsArtifactStore {
    auth_file: PathBuf,
    results_dir: PathBuf,
}

impl FsArtifactStore {
    pub fn new(auth_file: impl Into<PathBuf>, results_dir: impl Into<PathBuf>) -> Self {
        Self {
            auth_file: auth_file.into(),
            results_dir: results_dir.into(),
        }
    }
}

impl ArtifactStore for FsArtifactStore {
    fn save_auth(&self, config: &AuthConfiguration) -> Result<PathBuf> {
        persist_auth_configuration(config, &self.auth_file)?;
        Ok(self.auth_file.clone())
    }

    fn save_descriptor(&self, descriptor: &EnvironmentDescriptor) -> Result<PathBuf> {
        write_environment_descriptor(&self.results_dir, descriptor)
    }
}

/// Serialize the auth artifact to pretty JSON.
pub fn render_auth_artifact(config: &AuthConfiguration) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&config.clone().into_storage_state())
}

/// Write `{ "extraHTTPHeaders": config }` to `destination`, overwriting it.
pub fn persist_auth_configuration(config: &AuthConfiguration, destination: &Path) -> Result<()> {
    let json = render_auth_artifact(config)
        .map_err(|e| BootstrapError::serialization(destination, e))?;

    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| BootstrapError::io(parent, e))?;
    }
    fs::write(destination, json).map_err(|e| BootstrapError::io(destination, e))?;

    tracing::debug!(
        path = %destination.display(),
        headers = ?config.header_names(),
        "Auth artifact written"
    );
    Ok(())
}

/// Read an auth artifact back.
///
/// # Errors
///
/// Fails on unreadable or malformed files and on artifacts with no headers.
pub fn load_auth_state(path: &Path) -> Result<AuthConfiguration> {
    let raw = fs::read_to_string(path).map_err(|e| BootstrapError::io(path, e))?;
    let state: StorageState =
        serde_json::from_str(&raw).map_err(|e| BootstrapError::serialization(path, e))?;

    if state.extra_http_headers.is_empty() {
        return Err(BootstrapError::EmptyAuthArtifact(path.to_path_buf()));
    }
    Ok(state.extra_http_headers)
}

/// Create `destination_dir` if needed and write `environment.properties` into it.
///
/// Returns the path of the written file.
pub fn write_environment_descriptor(
    destination_dir: &Path,
    descriptor: &EnvironmentDescriptor,
) -> Result<PathBuf> {
    fs::create_dir_all(destination_dir).map_err(|e| BootstrapError::io(destination_dir, e))?;

    let path = destination_dir.join(EnvironmentDescriptor::FILE_NAME);
    fs::write(&path, descriptor.to_properties()).map_err(|e| BootstrapError::io(&path, e))?;

    tracing::debug!(path = %path.display(), "Environment descriptor written");
    Ok(path)
}
