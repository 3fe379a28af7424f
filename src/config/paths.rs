//! Path management for the contact book
//!
//! ## Path Resolution Order
//!
//! 1. `CONTACT_BOOK_DATA_DIR` environment variable (if set)
//! 2. The platform config directory joined with `contact-book`
//!    (`$XDG_CONFIG_HOME` or `~/.config` on Linux, `%APPDATA%` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::ContactError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "CONTACT_BOOK_DATA_DIR";

const APP_DIR_NAME: &str = "contact-book";

/// Manages all paths used by the contact book
#[derive(Debug, Clone)]
pub struct ContactPaths {
    /// Base directory for all contact book files
    base_dir: PathBuf,
}

impl ContactPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ContactError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ContactPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the address book snapshot
    pub fn address_book_file(&self) -> PathBuf {
        self.data_dir().join("addressbook.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), ContactError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ContactError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ContactError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, ContactError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| ContactError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join(APP_DIR_NAME))
}
