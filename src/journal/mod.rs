//! Transition journal
//!
//! Records every dispatched wizard action in an append-only JSON-lines file.
//! Once the file reaches `journal_max_bytes` it is moved to `journal.log.1`
//! and a fresh one is started, so at most two generations are kept.
//!
//! - `JournalEntry`: timestamp, action kind, touched field and the step
//!   movement. Field values are never stored.
//! - `JournalLogger`: appends and reads entries. It also implements
//!   `TransitionObserver`, so it can be attached straight to a `Wizard`.
//!
//! # Example
//!
//! ```rust,ignore
//! use signup_wizard::journal::JournalLogger;
//! use signup_wizard::wizard::Wizard;
//!
//! let journal = JournalLogger::new(paths.journal_file());
//! let mut wizard = Wizard::new().with_observer(Box::new(journal.clone()));
//! wizard.update_field(Field::Name, "Alice");
//! let recent = journal.read_recent(10)?;
//! ```

mod entry;
mod logger;

pub use entry::JournalEntry;
pub use logger::JournalLogger;

use crate::config::{Settings, WizardPaths};
use crate::wizard::Wizard;

/// Start a wizard session, attaching the journal when it is enabled
pub fn journaled_session(settings: &Settings, paths: &WizardPaths) -> Wizard {
    let wizard = Wizard::new();
    if settings.journal_enabled {
        let journal =
            JournalLogger::new(paths.journal_file()).with_max_bytes(settings.journal_max_bytes);
        wizard.with_observer(Box::new(journal))
    } else {
        wizard
    }
}
