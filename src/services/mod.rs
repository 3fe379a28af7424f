//! Service layer for the contact book
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation order and audit logging.

pub mod contact;

pub use contact::{AddOutcome, ContactService};
