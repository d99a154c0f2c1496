//! Wizard actions
//!
//! Every user interaction is expressed as one of these actions and folded
//! into the state by the reducer.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::state::{ErrorMap, Field};

/// An event that transitions the wizard state
#[derive(Clone, PartialEq, Eq)]
pub enum Action {
    /// Overwrite a field value and clear its error
    ///
    /// The value is wiped when the action is dropped.
    UpdateField {
        field: Field,
        value: Zeroizing<String>,
    },
    /// Move to the following step
    NextStep,
    /// Move to the preceding step
    PreviousStep,
    /// Replace the whole error map
    SetErrors(ErrorMap),
    /// Mark the registration as submitted
    Submit,
    /// Discard everything and start over
    Reset,
}

impl Action {
    /// Convenience constructor for field updates
    pub fn update(field: Field, value: impl Into<String>) -> Self {
        Self::UpdateField {
            field,
            value: Zeroizing::new(value.into()),
        }
    }

    /// The kind of this action, without its payload
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::UpdateField { .. } => ActionKind::UpdateField,
            Self::NextStep => ActionKind::NextStep,
            Self::PreviousStep => ActionKind::PreviousStep,
            Self::SetErrors(_) => ActionKind::SetErrors,
            Self::Submit => ActionKind::Submit,
            Self::Reset => ActionKind::Reset,
        }
    }

    /// The field this action touches, if any
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::UpdateField { field, .. } => Some(*field),
            _ => None,
        }
    }
}

// Field values stay out of debug output; passwords travel through here.
impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UpdateField { field, value } => f
                .debug_struct("UpdateField")
                .field("field", field)
                .field("len", &value.chars().count())
                .finish(),
            Self::SetErrors(errors) => f.debug_tuple("SetErrors").field(errors).finish(),
            other => write!(f, "{}", other.kind()),
        }
    }
}

/// Payload-free action discriminant, used for logging and the journal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    UpdateField,
    NextStep,
    PreviousStep,
    SetErrors,
    Submit,
    Reset,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UpdateField => write!(f, "UpdateField"),
            Self::NextStep => write!(f, "NextStep"),
            Self::PreviousStep => write!(f, "PreviousStep"),
            Self::SetErrors => write!(f, "SetErrors"),
            Self::Submit => write!(f, "Submit"),
            Self::Reset => write!(f, "Reset"),
        }
    }
}
