//! Error types for the credgate verification core.

use thiserror::Error;

/// Main error type for the verification core.
///
/// These are infrastructure errors: a call that returns one of these
/// produced no verification outcome at all. Rejected credentials are
/// not errors; they are reported through
/// [`Verification`](crate::verify::Verification).
#[derive(Error, Debug)]
pub enum GateError {
    /// Digest computation failed.
    #[error("Encoding error: {message}")]
    Encoding { message: String },

    /// Credential directory lookup failed.
    #[error("Directory error: {message}")]
    Directory { message: String },

    /// Invalid challenge parameters.
    #[error("Challenge error: {message}")]
    Challenge { message: String },

    /// Credentials file or settings errors.
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for verification core operations.
pub type GateResult<T> = Result<T, GateError>;
