//! Server-held credential record.

use chrono::{DateTime, Utc};

/// A subject's stored credential as resolved by the directory.
///
/// The secret is either a tagged digest or raw plaintext; `None` means
/// the subject exists but has no credential on record. The core borrows
/// a record for one verification call and never keeps it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    /// Stored secret, hashed or plaintext.
    pub secret: Option<String>,
    /// Instant after which the credential no longer verifies.
    pub valid_until: Option<DateTime<Utc>>,
}

impl CredentialRecord {
    /// Create a record holding the given secret with no expiry.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Some(secret.into()),
            valid_until: None,
        }
    }

    /// Create a record for a subject with no credential assigned.
    pub fn without_secret() -> Self {
        Self {
            secret: None,
            valid_until: None,
        }
    }

    /// Set the validity deadline.
    pub fn with_valid_until(mut self, deadline: DateTime<Utc>) -> Self {
        self.valid_until = Some(deadline);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_constructors() {
        let record = CredentialRecord::new("hunter2");
        assert_eq!(record.secret.as_deref(), Some("hunter2"));
        assert!(record.valid_until.is_none());

        let record = CredentialRecord::without_secret();
        assert!(record.secret.is_none());

        let deadline = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let record = CredentialRecord::new("hunter2").with_valid_until(deadline);
        assert_eq!(record.valid_until, Some(deadline));
    }
}
