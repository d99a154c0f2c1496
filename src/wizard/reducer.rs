//! The wizard reducer
//!
//! `reduce` is the only place wizard state changes. It never mutates its
//! input: each call builds and returns a fresh state.

use super::action::Action;
use super::state::{Step, WizardState};

/// Compute the state that follows `state` after `action`
pub fn reduce(state: &WizardState, action: Action) -> WizardState {
    match action {
        Action::Reset => WizardState::initial(),
        Action::UpdateField { field, value } => {
            let mut next = state.clone();
            next.form.set(field, value.as_str());
            next.errors.clear_field(field);
            next
        }
        Action::NextStep => WizardState {
            step: state.step.next().unwrap_or(state.step),
            ..state.clone()
        },
        // Step 1 has no predecessor; the state is left as it was.
        Action::PreviousStep => WizardState {
            step: state.step.previous().unwrap_or(state.step),
            ..state.clone()
        },
        Action::SetErrors(errors) => WizardState {
            errors,
            ..state.clone()
        },
        Action::Submit => WizardState {
            is_submitted: state.is_submitted || state.step == Step::Review,
            ..state.clone()
        },
    }
}
