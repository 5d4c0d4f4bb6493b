//! Loading a credential directory from a TOML credentials file.
//!
//! File format, one `[[subject]]` table per subject:
//!
//! ```toml
//! [[subject]]
//! name = "alice"
//! secret = "sha256<64 hex chars>"
//!
//! [[subject]]
//! name = "bob"
//! secret = "hunter2"
//! valid_until = "2026-01-01T00:00:00Z"
//! ```
//!
//! `secret` may be a tagged digest or plaintext and may be omitted for
//! a subject with no credential assigned. `valid_until` is an RFC 3339
//! string.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::credential::CredentialRecord;
use crate::error::{GateError, GateResult};

use super::MemoryDirectory;

/// Top-level structure of a credentials file.
#[derive(Debug, Deserialize)]
struct CredentialsFile {
    #[serde(default, rename = "subject")]
    subjects: Vec<SubjectEntry>,
}

/// One subject declaration.
#[derive(Debug, Deserialize)]
struct SubjectEntry {
    name: String,
    secret: Option<String>,
    valid_until: Option<DateTime<Utc>>,
}

/// Load a credential directory from a TOML credentials file.
///
/// # Errors
///
/// Returns a configuration error if the file cannot be read or parsed,
/// if a subject name is empty, or if a subject is declared twice.
pub fn load_credentials<P: AsRef<Path>>(path: P) -> GateResult<MemoryDirectory> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| GateError::Config {
        message: format!("Failed to read credentials file '{}': {}", path.display(), e),
    })?;

    let file: CredentialsFile = toml::from_str(&content).map_err(|e| GateError::Config {
        message: format!(
            "Failed to parse credentials file '{}': {}",
            path.display(),
            e
        ),
    })?;

    let mut directory = MemoryDirectory::new();
    for entry in file.subjects {
        if entry.name.is_empty() {
            return Err(GateError::Config {
                message: format!(
                    "Credentials file '{}' declares a subject with an empty name",
                    path.display()
                ),
            });
        }
        if directory.contains(&entry.name) {
            return Err(GateError::Config {
                message: format!(
                    "Credentials file '{}' declares subject \"{}\" more than once",
                    path.display(),
                    entry.name
                ),
            });
        }

        let record = CredentialRecord {
            secret: entry.secret,
            valid_until: entry.valid_until,
        };
        directory.insert(entry.name, record);
    }

    debug!(
        path = %path.display(),
        subjects = directory.len(),
        "Credential directory loaded"
    );

    Ok(directory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::directory::CredentialDirectory;
    use chrono::TimeZone;
    use tempfile::NamedTempFile;

    fn write_credentials(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_subjects() {
        let file = write_credentials(
            r#"
[[subject]]
name = "alice"
secret = "hunter2"

[[subject]]
name = "bob"
secret = "swordfish"
valid_until = "2026-01-01T00:00:00Z"

[[subject]]
name = "carol"
"#,
        );

        let directory = load_credentials(file.path()).unwrap();
        assert_eq!(directory.len(), 3);

        let alice = directory.find_credential("alice").unwrap().unwrap();
        assert_eq!(alice.secret.as_deref(), Some("hunter2"));
        assert!(alice.valid_until.is_none());

        let bob = directory.find_credential("bob").unwrap().unwrap();
        assert_eq!(
            bob.valid_until,
            Some(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap())
        );

        let carol = directory.find_credential("carol").unwrap().unwrap();
        assert!(carol.secret.is_none());
    }

    #[test]
    fn test_empty_file_loads_empty_directory() {
        let file = write_credentials("");
        let directory = load_credentials(file.path()).unwrap();
        assert!(directory.is_empty());
    }

    #[test]
    fn test_duplicate_subject_rejected() {
        let file = write_credentials(
            r#"
[[subject]]
name = "alice"
secret = "one"

[[subject]]
name = "alice"
secret = "two"
"#,
        );

        let result = load_credentials(file.path());
        assert!(matches!(result, Err(GateError::Config { .. })));
    }

    #[test]
    fn test_empty_subject_name_rejected() {
        let file = write_credentials(
            r#"
[[subject]]
name = ""
secret = "one"
"#,
        );

        let result = load_credentials(file.path());
        assert!(matches!(result, Err(GateError::Config { .. })));
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let file = write_credentials("[[subject]\nname = broken");
        let result = load_credentials(file.path());
        assert!(matches!(result, Err(GateError::Config { .. })));
    }

    #[test]
    fn test_missing_file_rejected() {
        let result = load_credentials("/nonexistent/credentials.toml");
        assert!(matches!(result, Err(GateError::Config { .. })));
    }
}
