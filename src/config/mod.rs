//! # Configuration Module
//!
//! This module handles bootstrap configuration loading and management.
//! Configuration can be loaded from:
//! - Environment variables (prefixed with APP__)
//! - Configuration files (config/default.toml, config/{environment}.toml)
//! - .env files (via dotenvy)
//!
//! Credentials themselves are not part of [`Settings`]; they are read from the
//! environment snapshot by the credential service.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use api_test_bootstrap::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Auth artifact goes to {}", settings.output.auth_file.display());
//! ```

mod settings;

pub use settings::*;
