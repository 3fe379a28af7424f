//! YAML Export functionality
//!
//! Exports the address book to YAML for human-readable backup.

use std::io::Write;

use crate::error::{ContactError, ContactResult};
use crate::export::json::ContactExport;
use crate::models::AddressBook;

/// Export the address book to YAML, preceded by a comment header
pub fn export_yaml<W: Write>(book: &AddressBook, writer: &mut W) -> ContactResult<()> {
    let export = ContactExport::from_book(book);

    let header = format!(
        "# Contact Book Export\n\
         # Generated: {}\n\
         # App Version: {}\n\
         #\n\
         # This file can be imported with `contacts import`.\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| ContactError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ContactError::Export(e.to_string()))?;

    Ok(())
}

/// Parse and validate a YAML export
pub fn import_from_yaml(yaml_str: &str) -> ContactResult<ContactExport> {
    let export: ContactExport =
        serde_yaml::from_str(yaml_str).map_err(|e| ContactError::Import(e.to_string()))?;

    export.validate().map_err(ContactError::Import)?;

    Ok(export)
}
