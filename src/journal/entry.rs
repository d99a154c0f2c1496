//! Journal entry data structures
//!
//! One entry per dispatched wizard action. Entries record what kind of
//! action ran and where the wizard moved, never the values typed into it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wizard::{ActionKind, Field, Transition};

/// A single journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// When the action was dispatched (UTC)
    pub timestamp: DateTime<Utc>,

    /// Kind of action dispatched
    pub action: ActionKind,

    /// Field touched by the action, for field updates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<Field>,

    /// Step number before the action
    pub from_step: u8,

    /// Step number after the action
    pub to_step: u8,

    /// Whether the wizard was submitted after the action
    #[serde(default)]
    pub submitted: bool,
}

impl JournalEntry {
    /// Create an entry for a transition, stamped with the current time
    pub fn from_transition(transition: &Transition) -> Self {
        Self {
            timestamp: Utc::now(),
            action: transition.kind,
            field: transition.field,
            from_step: transition.from.number(),
            to_step: transition.to.number(),
            submitted: transition.submitted,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.action
        );

        if let Some(field) = self.field {
            output.push_str(&format!(" ({})", field));
        }

        if self.from_step != self.to_step {
            output.push_str(&format!(" step {} -> {}", self.from_step, self.to_step));
        }

        if self.submitted {
            output.push_str(" [submitted]");
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::Step;

    fn transition(kind: ActionKind, field: Option<Field>, from: Step, to: Step) -> Transition {
        Transition {
            kind,
            field,
            from,
            to,
            submitted: false,
        }
    }

    #[test]
    fn test_from_transition() {
        let entry = JournalEntry::from_transition(&transition(
            ActionKind::NextStep,
            None,
            Step::Personal,
            Step::Account,
        ));
        assert_eq!(entry.action, ActionKind::NextStep);
        assert_eq!(entry.from_step, 1);
        assert_eq!(entry.to_step, 2);
        assert!(entry.field.is_none());
    }

    #[test]
    fn test_serialization_omits_missing_field() {
        let entry = JournalEntry::from_transition(&transition(
            ActionKind::Reset,
            None,
            Step::Review,
            Step::Personal,
        ));
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"action\":\"reset\""));
        assert!(!json.contains("\"field\""));
    }

    #[test]
    fn test_human_readable() {
        let entry = JournalEntry::from_transition(&transition(
            ActionKind::UpdateField,
            Some(Field::Email),
            Step::Personal,
            Step::Personal,
        ));
        let output = entry.format_human_readable();
        assert!(output.contains("UpdateField (email)"));
        assert!(!output.contains("->"));

        let entry = JournalEntry::from_transition(&transition(
            ActionKind::PreviousStep,
            None,
            Step::Account,
            Step::Personal,
        ));
        assert!(entry.format_human_readable().ends_with("PreviousStep step 2 -> 1"));
    }
}
