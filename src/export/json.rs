//! JSON Export functionality
//!
//! Exports the complete address book to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Write;

use crate::error::{ContactError, ContactResult};
use crate::models::{AddressBook, Record};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full address book export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All contacts in address book order
    pub contacts: Vec<Record>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub contact_count: usize,
    pub phone_count: usize,
    /// Contacts with a birthday recorded
    pub birthday_count: usize,
}

impl ContactExport {
    /// Snapshot an address book
    pub fn from_book(book: &AddressBook) -> Self {
        let contacts = book.records().to_vec();

        let metadata = ExportMetadata {
            contact_count: contacts.len(),
            phone_count: contacts.iter().map(|r| r.phones().len()).sum(),
            birthday_count: contacts.iter().filter(|r| r.birthday().is_some()).count(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            contacts,
            metadata,
        }
    }

    /// Check an export read back from disk before importing it
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let mut seen = HashSet::new();
        for record in &self.contacts {
            if !seen.insert(record.name().as_str()) {
                return Err(format!("Duplicate contact name: {}", record.name()));
            }
        }

        Ok(())
    }
}

/// Write the address book as JSON
pub fn export_json<W: Write>(book: &AddressBook, writer: &mut W, pretty: bool) -> ContactResult<()> {
    let export = ContactExport::from_book(book);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ContactError::Export(e.to_string()))?;

    Ok(())
}

/// Parse and validate a JSON export
pub fn import_from_json(json_str: &str) -> ContactResult<ContactExport> {
    let export: ContactExport =
        serde_json::from_str(json_str).map_err(|e| ContactError::Import(e.to_string()))?;

    export.validate().map_err(ContactError::Import)?;

    Ok(export)
}
