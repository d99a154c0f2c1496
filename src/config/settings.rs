//! User settings for the signup wizard
//!
//! Manages preferences for the terminal front end: event tick rate, password
//! masking, logging level and the transition journal.

use serde::{Deserialize, Serialize};

use super::paths::WizardPaths;
use crate::error::WizardError;

/// User settings for the signup wizard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Terminal event tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Whether dispatched actions are appended to the transition journal
    #[serde(default = "default_journal_enabled")]
    pub journal_enabled: bool,

    /// Journal size in bytes at which it is rotated to `journal.log.1`
    #[serde(default = "default_journal_max_bytes")]
    pub journal_max_bytes: u64,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Character drawn in place of each password character
    #[serde(default = "default_mask_char")]
    pub mask_char: char,
}

fn default_schema_version() -> u32 {
    1
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_journal_enabled() -> bool {
    true
}

fn default_journal_max_bytes() -> u64 {
    1024 * 1024
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_mask_char() -> char {
    '*'
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            tick_rate_ms: default_tick_rate_ms(),
            journal_enabled: default_journal_enabled(),
            journal_max_bytes: default_journal_max_bytes(),
            log_level: default_log_level(),
            mask_char: default_mask_char(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &WizardPaths) -> Result<Self, WizardError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| WizardError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                WizardError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WizardPaths) -> Result<(), WizardError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| WizardError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| WizardError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Tick rate as a Duration
    pub fn tick_rate(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_rate_ms.max(1))
    }
}
