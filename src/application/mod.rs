//! Application Layer
//!
//! Orchestrates the domain rules and the artifact store into the setup
//! phase, and holds the scenario catalogs of the built-in profiles.

pub mod services;
