//! Artifact store trait.

use std::path::PathBuf;

use super::{AuthConfiguration, EnvironmentDescriptor};
use crate::shared::error::Result;

/// Destination for the setup artifacts.
pub trait ArtifactStore {
    /// Persist the auth artifact, replacing any previous one.
    fn save_auth(&self, config: &AuthConfiguration) -> Result<PathBuf>;

    /// Persist the environment descriptor, replacing any previous one.
    fn save_descriptor(&self, descriptor: &EnvironmentDescriptor) -> Result<PathBuf>;
}
