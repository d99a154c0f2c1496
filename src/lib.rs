//! signup-wizard - Terminal-based three-step registration wizard
//!
//! The wizard collects personal details, then account details, shows a
//! review, and ends on a confirmation screen that can start over. Its core
//! is a pure reducer over an immutable state value, so every behaviour can
//! be tested without a terminal.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `wizard`: State, actions, reducer, validation and the view model
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `journal`: Append-only transition journal
//! - `logging`: Diagnostic logging setup
//! - `tui`: Full-screen terminal front end
//! - `plain`: Line-prompt front end
//! - `cli`: Non-interactive command handlers
//!
//! # Example
//!
//! ```rust
//! use signup_wizard::wizard::{Advance, Field, Step, Wizard};
//!
//! let mut wizard = Wizard::new();
//! wizard.update_field(Field::Name, "Alice");
//! wizard.update_field(Field::Email, "a@b.com");
//! assert_eq!(wizard.advance(), Advance::Advanced(Step::Account));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod journal;
pub mod logging;
pub mod plain;
pub mod tui;
pub mod wizard;

pub use error::WizardError;
