//! Error types for credgate.
//!
//! Provides a unified error handling system using thiserror.

mod types;

pub use types::*;
