//! User settings for the contact book
//!
//! Stored as `config.json` in the base directory. Missing fields fall back
//! to their defaults so older files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::ContactPaths;
use crate::error::ContactError;
use crate::models::DEFAULT_BIRTHDAY_WINDOW_DAYS;

/// User settings for the contact book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// How many days ahead the `birthdays` command looks
    #[serde(default = "default_birthday_window_days")]
    pub birthday_window_days: u32,

    /// Whether contact changes are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_birthday_window_days() -> u32 {
    DEFAULT_BIRTHDAY_WINDOW_DAYS
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            birthday_window_days: default_birthday_window_days(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, writing the defaults if the file doesn't exist
    pub fn load_or_create(paths: &ContactPaths) -> Result<Self, ContactError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ContactError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ContactError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ContactPaths) -> Result<(), ContactError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ContactError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ContactError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
