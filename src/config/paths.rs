//! Path management for the signup wizard
//!
//! Provides XDG-compliant path resolution for configuration, logs and the
//! transition journal.
//!
//! ## Path Resolution Order
//!
//! 1. `SIGNUP_WIZARD_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/signup-wizard` or `~/.config/signup-wizard`
//! 3. Windows: `%APPDATA%\signup-wizard`

use std::path::PathBuf;

use crate::error::WizardError;

/// Environment variable that overrides the base directory
pub const DIR_ENV_VAR: &str = "SIGNUP_WIZARD_DIR";

/// Manages all paths used by the signup wizard
#[derive(Debug, Clone)]
pub struct WizardPaths {
    /// Base directory for all wizard files
    base_dir: PathBuf,
}

impl WizardPaths {
    /// Create a new WizardPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, WizardError> {
        let base_dir = if let Ok(custom) = std::env::var(DIR_ENV_VAR) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create WizardPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/signup-wizard/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the log directory (~/.config/signup-wizard/logs/)
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the transition journal
    pub fn journal_file(&self) -> PathBuf {
        self.base_dir.join("journal.log")
    }

    /// Ensure the base and log directories exist
    pub fn ensure_directories(&self) -> Result<(), WizardError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| WizardError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.log_dir())
            .map_err(|e| WizardError::Io(format!("Failed to create log directory: {}", e)))?;

        Ok(())
    }

    /// Check if settings have been written (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, WizardError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                WizardError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("signup-wizard"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, WizardError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| WizardError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("signup-wizard"))
}
