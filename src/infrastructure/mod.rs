//! Infrastructure Layer
//!
//! Contains implementations for external resources:
//! - File system artifact store
//! - Host platform detection

pub mod host;
pub mod storage;
