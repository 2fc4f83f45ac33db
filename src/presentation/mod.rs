//! Presentation Layer
//!
//! Command line arguments and output rendering.

pub mod cli;
