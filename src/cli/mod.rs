//! CLI command handlers
//!
//! Non-interactive commands, bridging clap argument parsing with the wizard
//! core and the journal.

pub mod check;
pub mod journal;

pub use check::{handle_check_command, CheckArgs};
pub use journal::{handle_journal_command, JournalArgs};
