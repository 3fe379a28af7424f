//! Export module for the contact book
//!
//! Provides address book export in multiple formats:
//! - CSV: one row per contact (spreadsheet-compatible)
//! - JSON: machine-readable, re-importable
//! - YAML: human-readable, re-importable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_csv;
pub use json::{export_json, import_from_json, ContactExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_yaml, import_from_yaml};
