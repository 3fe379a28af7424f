//! Contact Book - terminal address book with birthday reminders
//!
//! This library provides the core functionality for the `contacts` assistant:
//! validated contact records, an insertion-ordered address book, the
//! upcoming-birthdays query, and the interactive command session.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Field validators, records and the address book
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `display`: Terminal output formatting
//! - `export`: JSON, YAML and CSV export/import
//! - `cli`: Assistant session and subcommand handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use contact_book::config::{paths::ContactPaths, settings::Settings};
//! use contact_book::storage::Storage;
//!
//! let paths = ContactPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?.with_audit(settings.audit_enabled);
//! storage.load()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::ContactError;
