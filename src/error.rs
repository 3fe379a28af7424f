//! Custom error types for the contact book
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::FieldError;

/// The main error type for contact book operations
#[derive(Error, Debug)]
pub enum ContactError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A field value (name, phone, birthday) failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A command was given the wrong number of arguments
    #[error("Wrong arguments for '{command}', expected: {usage}")]
    Argument {
        command: String,
        usage: &'static str,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),
}

impl ContactError {
    /// Create a "not found" error for contacts
    pub fn contact_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Contact",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for phone numbers
    pub fn phone_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Phone",
            identifier: identifier.into(),
        }
    }

    /// Create an argument error for a command
    pub fn arguments(command: impl Into<String>, usage: &'static str) -> Self {
        Self::Argument {
            command: command.into(),
            usage,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an argument count error
    pub fn is_argument(&self) -> bool {
        matches!(self, Self::Argument { .. })
    }
}

// Implement From traits for common error types

impl From<FieldError> for ContactError {
    fn from(err: FieldError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<std::io::Error> for ContactError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ContactError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for contact book operations
pub type ContactResult<T> = Result<T, ContactError>;
