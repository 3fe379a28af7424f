//! Storage layer for the contact book
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus the audit hooks the service layer calls after each change.

pub mod contacts;
pub mod file_io;

pub use contacts::ContactRepository;
pub use file_io::{read_json, write_json_atomic};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::ContactPaths;
use crate::error::ContactError;

/// Main storage coordinator
pub struct Storage {
    paths: ContactPaths,
    pub contacts: ContactRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance with audit logging enabled
    pub fn new(paths: ContactPaths) -> Result<Self, ContactError> {
        paths.ensure_directories()?;

        Ok(Self {
            contacts: ContactRepository::new(paths.address_book_file()),
            audit: Some(AuditLogger::new(paths.audit_log())),
            paths,
        })
    }

    /// Turn audit logging on or off
    pub fn with_audit(mut self, enabled: bool) -> Self {
        self.audit = enabled.then(|| AuditLogger::new(self.paths.audit_log()));
        self
    }

    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Load all data from disk
    pub fn load(&mut self) -> Result<(), ContactError> {
        self.contacts.load()
    }

    /// Save all data to disk
    pub fn save(&self) -> Result<(), ContactError> {
        self.contacts.save()
    }

    /// Record a contact creation in the audit log
    pub fn log_create<T: Serialize>(&self, contact: &str, entity: &T) -> Result<(), ContactError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::create(contact, entity)),
            None => Ok(()),
        }
    }

    /// Record a contact change in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        contact: &str,
        before: &T,
        after: &T,
        summary: Option<String>,
    ) -> Result<(), ContactError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::update(contact, before, after, summary)),
            None => Ok(()),
        }
    }

    /// Record a contact deletion in the audit log
    pub fn log_delete<T: Serialize>(&self, contact: &str, entity: &T) -> Result<(), ContactError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::delete(contact, entity)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(storage.audit().is_some());
    }

    #[test]
    fn test_audit_hooks_write_entries() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        storage.log_create("John", &json!({"name": "John"})).unwrap();
        storage.log_delete("John", &json!({"name": "John"})).unwrap();

        let entries = storage.audit().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_audit_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap().with_audit(false);

        storage.log_create("John", &json!({"name": "John"})).unwrap();

        assert!(storage.audit().is_none());
        assert!(!paths.audit_log().exists());
    }
}
