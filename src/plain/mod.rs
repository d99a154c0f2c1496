//! Line-prompt wizard
//!
//! A non-fullscreen alternative to the TUI: the same wizard session driven
//! by one question per line, with the password read without echo.

pub mod prompter;
pub mod session;

pub use prompter::{Prompter, TerminalPrompter};
pub use session::{PlainOutcome, PlainSession};
