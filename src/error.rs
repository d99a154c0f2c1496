//! Custom error types for the signup wizard
//!
//! Field validation failures are not errors in this sense; they live in the
//! wizard state as an [`ErrorMap`](crate::wizard::ErrorMap). This module covers
//! the program-level failures around it: configuration, file I/O, the
//! transition journal and the terminal.

use thiserror::Error;

/// The main error type for signup wizard operations
#[derive(Error, Debug)]
pub enum WizardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Transition journal errors
    #[error("Journal error: {0}")]
    Journal(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl WizardError {
    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<std::io::Error> for WizardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WizardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for signup wizard operations
pub type WizardResult<T> = Result<T, WizardError>;
