//! Property-based tests for the wizard reducer
//!
//! Tests invariants over arbitrary action sequences:
//! - The step never leaves 1..=3
//! - Reset returns the initial state from anywhere
//! - UpdateField always clears that field's error and no other

use proptest::prelude::*;

use signup_wizard::wizard::{reduce, Action, ErrorMap, Field, Step, WizardState};

fn arb_field() -> impl Strategy<Value = Field> {
    prop_oneof![
        Just(Field::Name),
        Just(Field::Email),
        Just(Field::Username),
        Just(Field::Password),
    ]
}

fn arb_errors() -> impl Strategy<Value = ErrorMap> {
    prop::collection::vec((arb_field(), "[a-z ]{0,12}"), 0..4).prop_map(|pairs| {
        pairs
            .into_iter()
            .fold(ErrorMap::new(), |errors, (field, message)| errors.with(field, message))
    })
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (arb_field(), ".{0,16}").prop_map(|(field, value)| Action::update(field, value)),
        Just(Action::NextStep),
        Just(Action::PreviousStep),
        arb_errors().prop_map(Action::SetErrors),
        Just(Action::Submit),
        Just(Action::Reset),
    ]
}

fn arb_actions() -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(arb_action(), 0..40)
}

fn fold(actions: Vec<Action>) -> WizardState {
    actions
        .into_iter()
        .fold(WizardState::initial(), |state, action| reduce(&state, action))
}

proptest! {
    #[test]
    fn step_stays_in_range(actions in arb_actions()) {
        let mut state = WizardState::initial();
        for action in actions {
            state = reduce(&state, action);
            prop_assert!((1..=Step::COUNT).contains(&state.step.number()));
        }
    }

    #[test]
    fn reset_returns_initial_state(actions in arb_actions()) {
        let state = reduce(&fold(actions), Action::Reset);
        prop_assert_eq!(state, WizardState::initial());
    }

    #[test]
    fn update_clears_only_that_error(
        actions in arb_actions(),
        errors in arb_errors(),
        field in arb_field(),
        value in ".{0,16}",
    ) {
        let before = reduce(&fold(actions), Action::SetErrors(errors));
        let after = reduce(&before, Action::update(field, value.clone()));

        prop_assert!(!after.errors.has_error(field));
        prop_assert_eq!(after.form.get(field), value.as_str());
        for other in Field::ALL.into_iter().filter(|f| *f != field) {
            prop_assert_eq!(after.errors.message(other), before.errors.message(other));
            prop_assert_eq!(after.form.get(other), before.form.get(other));
        }
        prop_assert_eq!(after.step, before.step);
        prop_assert_eq!(after.is_submitted, before.is_submitted);
    }
}
