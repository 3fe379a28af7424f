//! Core data models for the contact book
//!
//! Validated contact fields, the contact record, and the address book that
//! holds every record and answers the upcoming birthday query.

pub mod address_book;
pub mod fields;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use fields::{Birthday, FieldError, Name, Phone};
pub use record::Record;
