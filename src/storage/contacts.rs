//! Address book repository for JSON storage
//!
//! Loads the whole book from `addressbook.json` at startup and writes it back
//! in one piece on save.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ContactError;
use crate::models::{AddressBook, Record};

use super::file_io::{read_json, write_json_atomic};

const SCHEMA_VERSION: u32 = 1;

/// Serializable snapshot of the address book
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AddressBookData {
    #[serde(default = "default_schema_version")]
    schema_version: u32,
    #[serde(default)]
    contacts: Vec<Record>,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl Default for AddressBookData {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            contacts: Vec::new(),
        }
    }
}

/// Repository for address book persistence
pub struct ContactRepository {
    path: PathBuf,
    book: AddressBook,
}

impl ContactRepository {
    /// Create a repository backed by `path`, starting with an empty book
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            book: AddressBook::new(),
        }
    }

    /// Replace the in-memory book with the file's contents
    ///
    /// A missing file yields an empty book.
    pub fn load(&mut self) -> Result<(), ContactError> {
        let file_data: AddressBookData = read_json(&self.path)?;
        self.book = AddressBook::from_records(file_data.contacts);

        debug!(path = %self.path.display(), contacts = self.book.len(), "loaded address book");
        Ok(())
    }

    /// Write the whole book to disk
    pub fn save(&self) -> Result<(), ContactError> {
        let file_data = AddressBookData {
            schema_version: SCHEMA_VERSION,
            contacts: self.book.records().to_vec(),
        };
        write_json_atomic(&self.path, &file_data)?;

        debug!(path = %self.path.display(), contacts = self.book.len(), "saved address book");
        Ok(())
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
