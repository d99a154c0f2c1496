//! Journal CLI command
//!
//! Shows recent entries from the transition journal.

use clap::Args;
use tabled::{settings::Style, Table, Tabled};

use crate::config::WizardPaths;
use crate::error::WizardResult;
use crate::journal::{JournalEntry, JournalLogger};

/// Journal display options
#[derive(Args, Debug)]
pub struct JournalArgs {
    /// Number of most recent entries to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

#[derive(Tabled)]
struct JournalRow {
    #[tabled(rename = "Time (UTC)")]
    time: String,
    #[tabled(rename = "Action")]
    action: String,
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Step")]
    step: String,
    #[tabled(rename = "Submitted")]
    submitted: String,
}

impl From<&JournalEntry> for JournalRow {
    fn from(entry: &JournalEntry) -> Self {
        Self {
            time: entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            action: entry.action.to_string(),
            field: entry.field.map(|f| f.to_string()).unwrap_or_default(),
            step: if entry.from_step == entry.to_step {
                entry.to_step.to_string()
            } else {
                format!("{} -> {}", entry.from_step, entry.to_step)
            },
            submitted: if entry.submitted { "yes" } else { "" }.to_string(),
        }
    }
}

/// Render entries as a table
pub fn journal_table(entries: &[JournalEntry]) -> String {
    let rows: Vec<JournalRow> = entries.iter().map(JournalRow::from).collect();
    Table::new(rows).with(Style::sharp()).to_string()
}

/// Handle the journal command
pub fn handle_journal_command(paths: &WizardPaths, args: JournalArgs) -> WizardResult<()> {
    let logger = JournalLogger::new(paths.journal_file());
    let entries = logger.read_recent(args.limit)?;

    if entries.is_empty() {
        println!("No journal entries found.");
        return Ok(());
    }

    println!("{}", journal_table(&entries));
    println!(
        "Showing {} of {} entries from {}",
        entries.len(),
        logger.entry_count()?,
        logger.path().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{ActionKind, Step, Transition};

    #[test]
    fn test_table_rows() {
        let entries = vec![
            JournalEntry::from_transition(&Transition {
                kind: ActionKind::NextStep,
                field: None,
                from: Step::Personal,
                to: Step::Account,
                submitted: false,
            }),
            JournalEntry::from_transition(&Transition {
                kind: ActionKind::Submit,
                field: None,
                from: Step::Review,
                to: Step::Review,
                submitted: true,
            }),
        ];

        let table = journal_table(&entries);
        assert!(table.contains("NextStep"));
        assert!(table.contains("1 -> 2"));
        assert!(table.contains("yes"));
    }
}
