//! Per-attempt challenge salt.

use crate::error::{GateError, GateResult};

/// A one-time salt issued for a single authentication attempt.
///
/// Constructing a `Challenge` guarantees the salt is non-empty, so the
/// matcher never has to re-check it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    salt: Vec<u8>,
}

impl Challenge {
    /// Create a challenge from the given salt bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the salt is empty.
    pub fn new(salt: impl Into<Vec<u8>>) -> GateResult<Self> {
        let salt = salt.into();
        if salt.is_empty() {
            return Err(GateError::Challenge {
                message: "challenge salt must not be empty".to_string(),
            });
        }
        Ok(Self { salt })
    }

    /// The salt bytes.
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// Length of the salt in bytes, always strictly positive.
    pub fn salt_len(&self) -> usize {
        self.salt.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_salt_accepted() {
        let challenge = Challenge::new(b"s4lt".as_slice()).unwrap();
        assert_eq!(challenge.salt(), b"s4lt");
        assert_eq!(challenge.salt_len(), 4);
    }

    #[test]
    fn test_empty_salt_rejected() {
        let result = Challenge::new(Vec::new());
        assert!(matches!(result, Err(GateError::Challenge { .. })));
    }
}
