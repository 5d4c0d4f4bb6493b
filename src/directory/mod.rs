//! Credential directory: resolving a subject identity to its stored
//! credential record.
//!
//! The verification core never queries any global state; it is handed a
//! directory implementation and asks it for one record per attempt.
//! Lookup failures are reported through [`DirectoryError`], which is
//! distinct from a rejected verification.

mod file;
mod memory;

use thiserror::Error;

use crate::credential::CredentialRecord;

pub use file::load_credentials;
pub use memory::MemoryDirectory;

/// Source of credential records, injected into the verifier.
pub trait CredentialDirectory {
    /// Resolve a subject identity to its credential record.
    ///
    /// Returns `Ok(None)` when the subject is unknown. An `Err` means
    /// the lookup itself failed and no verification decision was made.
    fn find_credential(&self, subject: &str) -> Result<Option<CredentialRecord>, DirectoryError>;
}

/// Failure of a directory lookup.
#[derive(Error, Debug)]
#[error("credential lookup failed: {message}")]
pub struct DirectoryError {
    /// Description of the lookup failure.
    pub message: String,
}

impl DirectoryError {
    /// Create a lookup error with the given description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
