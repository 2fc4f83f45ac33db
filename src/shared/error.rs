//! Bootstrap Error Types
//!
//! Centralized error handling for the setup phase.

use std::path::PathBuf;

/// Credential configuration problems detected before anything is written.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Both {username_var} and {password_var} must be set for HTTP Basic authentication")]
    IncompleteBasicCredentials {
        username_var: &'static str,
        password_var: &'static str,
    },

    #[error(
        "Conflicting credentials: {first} and {second} both target the Authorization header; set only one"
    )]
    ConflictingAuthorization {
        first: &'static str,
        second: &'static str,
    },

    #[error("No authentication credentials found. Please set {expected} environment variables")]
    NoCredentials { expected: String },
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    #[error("Profile {0} recognizes no authentication scheme")]
    ProfileWithoutSchemes(String),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error at {path}: {source}")]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid auth artifact at {0}: no headers present")]
    EmptyAuthArtifact(PathBuf),
}

impl BootstrapError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn serialization(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Serialization {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the crate
pub type Result<T, E = BootstrapError> = std::result::Result<T, E>;
