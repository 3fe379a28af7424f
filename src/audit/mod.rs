//! Audit logging for contact changes
//!
//! Every create, update and delete performed through the contact service is
//! appended to `audit.log` as one JSON line, with before/after snapshots of
//! the record.
//!
//! # Example
//!
//! ```rust,ignore
//! use contact_book::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create("John", &record))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
