//! # Domain Layer
//!
//! The rules of the setup phase, independent of the file system and the CLI.
//!
//! ## Structure
//!
//! - **entities**: Auth configuration, environment descriptor, profiles
//! - **value_objects**: Environment snapshot, auth schemes, media types
//! - **services**: Credential derivation and the scenario matrix
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - The environment is an explicit input, never read ambiently
//! - The artifact store trait defines the persistence contract

pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
