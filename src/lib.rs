//! # API Test Bootstrap Library
//!
//! Global setup for end-to-end REST API test runs:
//! - Derives authentication headers from environment variables (API key,
//!   OAuth bearer token, or HTTP Basic) and fails fast on misconfiguration
//! - Persists them as the auth artifact attached to every test request
//! - Writes the environment descriptor consumed by the report viewer
//! - Models the content-type x accept-type x status scenario matrix of the
//!   API suites
//!
//! ## Architecture
//!
//! - **Domain Layer**: Credential rules, artifacts, profiles, scenario matrix
//! - **Application Layer**: The bootstrap service and scenario catalogs
//! - **Infrastructure Layer**: File system store and host detection
//! - **Presentation Layer**: Command line interface
//!
//! ## Module Structure
//!
//! ```text
//! api_test_bootstrap/
//! +-- config/         Settings loading
//! +-- domain/         Entities, value objects, domain services
//! +-- application/    Bootstrap service, scenario catalogs
//! +-- infrastructure/ Artifact storage, host info
//! +-- presentation/   CLI
//! +-- shared/         Error types
//! ```

// Configuration module
pub mod config;

// Domain layer - Core rules
pub mod domain;

// Application layer - Services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - CLI
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup
pub mod startup;

// Telemetry and observability
pub mod telemetry;
