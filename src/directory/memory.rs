//! In-memory credential directory.

use std::collections::HashMap;

use crate::credential::CredentialRecord;

use super::{CredentialDirectory, DirectoryError};

/// Credential directory backed by a process-local map.
///
/// Suitable for embedding applications that manage subjects themselves
/// and for tests. Populate it with [`insert`](Self::insert) or load it
/// from a credentials file with
/// [`load_credentials`](super::load_credentials).
#[derive(Debug, Clone, Default)]
pub struct MemoryDirectory {
    subjects: HashMap<String, CredentialRecord>,
}

impl MemoryDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a subject's credential record.
    pub fn insert(&mut self, subject: impl Into<String>, record: CredentialRecord) {
        self.subjects.insert(subject.into(), record);
    }

    /// Check whether a subject is present.
    pub fn contains(&self, subject: &str) -> bool {
        self.subjects.contains_key(subject)
    }

    /// Number of subjects in the directory.
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// Check whether the directory holds no subjects.
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

impl CredentialDirectory for MemoryDirectory {
    fn find_credential(&self, subject: &str) -> Result<Option<CredentialRecord>, DirectoryError> {
        Ok(self.subjects.get(subject).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_subject() {
        let mut directory = MemoryDirectory::new();
        directory.insert("alice", CredentialRecord::new("hunter2"));

        let record = directory.find_credential("alice").unwrap();
        assert_eq!(record, Some(CredentialRecord::new("hunter2")));
    }

    #[test]
    fn test_lookup_unknown_subject() {
        let directory = MemoryDirectory::new();
        assert_eq!(directory.find_credential("nobody").unwrap(), None);
    }

    #[test]
    fn test_insert_replaces_existing_record() {
        let mut directory = MemoryDirectory::new();
        directory.insert("alice", CredentialRecord::new("old"));
        directory.insert("alice", CredentialRecord::new("new"));

        assert_eq!(directory.len(), 1);
        let record = directory.find_credential("alice").unwrap().unwrap();
        assert_eq!(record.secret.as_deref(), Some("new"));
    }
}
