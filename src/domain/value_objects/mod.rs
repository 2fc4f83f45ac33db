//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! ## Value Objects
//!
//! - **EnvSnapshot**: Read-only view of environment variables
//! - **AuthScheme**: API key, bearer token, or HTTP Basic
//! - **MediaType / ResponseStatus**: Building blocks of scenario suites

mod auth_scheme;
mod env_snapshot;
mod media_type;

pub use auth_scheme::*;
pub use env_snapshot::*;
pub use media_type::*;
