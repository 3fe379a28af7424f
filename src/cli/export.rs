//! CLI commands for exporting and importing the address book

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::info;

use crate::error::{ContactError, ContactResult};
use crate::export::{export_csv, export_json, export_yaml, import_from_json, import_from_yaml};
use crate::models::AddressBook;
use crate::services::ContactService;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON (re-importable)
    Json,
    /// YAML (re-importable, human-readable)
    Yaml,
    /// CSV, one row per contact
    Csv,
}

impl ExportFormat {
    /// Guess the import format from a file extension; anything but YAML is JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Write the address book to `output`, or to stdout when no path is given
pub fn handle_export(
    storage: &Storage,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> ContactResult<()> {
    let book = storage.contacts.book();

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                ContactError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(book, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| ContactError::Export(e.to_string()))?;

            info!(path = %path.display(), ?format, "address book exported");
            println!("Exported {} contacts to: {}", book.len(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_export(book, format, &mut writer)?;
            writeln!(writer)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    book: &AddressBook,
    format: ExportFormat,
    writer: &mut W,
) -> ContactResult<()> {
    match format {
        ExportFormat::Json => export_json(book, writer, true),
        ExportFormat::Yaml => export_yaml(book, writer),
        ExportFormat::Csv => export_csv(book, writer),
    }
}

/// Merge an export file into the address book and save it
///
/// Returns `(created, replaced)` counts.
pub fn handle_import(storage: &mut Storage, file: &Path) -> ContactResult<(usize, usize)> {
    let contents = std::fs::read_to_string(file).map_err(|e| {
        ContactError::Import(format!("Failed to read {}: {}", file.display(), e))
    })?;

    let export = match ExportFormat::from_path(file) {
        ExportFormat::Yaml => import_from_yaml(&contents)?,
        _ => import_from_json(&contents)?,
    };

    let total = export.contacts.len();
    let created = ContactService::new(storage).import_records(export.contacts)?;
    storage.save()?;

    info!(file = %file.display(), created, total, "import complete");
    Ok((created, total - created))
}
