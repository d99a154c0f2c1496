//! Wizard controller
//!
//! Owns the current state and routes every change through the reducer. The
//! controller also carries the one piece of orchestration the reducer does
//! not: validating the current step before advancing.

use tracing::{debug, info};

use super::action::{Action, ActionKind};
use super::reducer::reduce;
use super::state::{Field, Step, WizardState};
use super::validation::{is_next_disabled, validate_step};
use super::view::WizardView;

/// Summary of one dispatched action, free of field values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub kind: ActionKind,
    pub field: Option<Field>,
    pub from: Step,
    pub to: Step,
    pub submitted: bool,
}

/// Receives a [`Transition`] after every dispatch
pub trait TransitionObserver {
    fn on_transition(&mut self, transition: &Transition);
}

/// Outcome of trying to move to the next step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Validation passed and the step advanced
    Advanced(Step),
    /// Validation failed; the error map was replaced
    Rejected,
    /// There is no next step (review step or already submitted)
    Unavailable,
}

/// A wizard session
#[derive(Default)]
pub struct Wizard {
    state: WizardState,
    observers: Vec<Box<dyn TransitionObserver>>,
}

impl Wizard {
    /// Start a fresh session
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an observer
    pub fn with_observer(mut self, observer: Box<dyn TransitionObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Current state
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// View model for the current state
    pub fn view(&self) -> WizardView<'_> {
        WizardView::from_state(&self.state)
    }

    /// Apply an action and return the resulting state
    pub fn dispatch(&mut self, action: Action) -> &WizardState {
        let kind = action.kind();
        let field = action.field();
        let from = self.state.step;

        self.state = reduce(&self.state, action);

        let transition = Transition {
            kind,
            field,
            from,
            to: self.state.step,
            submitted: self.state.is_submitted,
        };
        debug!(
            action = %kind,
            field = field.map(|f| f.key()),
            from = from.number(),
            to = transition.to.number(),
            "dispatched"
        );
        for observer in &mut self.observers {
            observer.on_transition(&transition);
        }

        &self.state
    }

    /// Overwrite a field value
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.dispatch(Action::update(field, value));
    }

    /// Whether the coarse non-empty gate currently blocks Next
    pub fn is_next_disabled(&self) -> bool {
        self.state.is_submitted
            || self.state.step.is_last()
            || is_next_disabled(self.state.step, &self.state.form)
    }

    /// Validate the current step and advance if it passes
    pub fn advance(&mut self) -> Advance {
        if self.state.is_submitted || self.state.step.is_last() {
            return Advance::Unavailable;
        }

        let errors = validate_step(self.state.step, &self.state.form);
        if errors.is_empty() {
            self.dispatch(Action::NextStep);
            Advance::Advanced(self.state.step)
        } else {
            debug!(step = self.state.step.number(), failures = errors.len(), "validation failed");
            self.dispatch(Action::SetErrors(errors));
            Advance::Rejected
        }
    }

    /// Go back one step; returns false when already on the first step
    pub fn back(&mut self) -> bool {
        if self.state.is_submitted || self.state.step.is_first() {
            return false;
        }
        self.dispatch(Action::PreviousStep);
        true
    }

    /// Submit from the review step; returns whether the wizard is now submitted
    pub fn submit(&mut self) -> bool {
        if self.state.step != Step::Review || self.state.is_submitted {
            return self.state.is_submitted;
        }
        self.dispatch(Action::Submit);
        info!("registration submitted");
        true
    }

    /// Discard everything and start over
    pub fn reset(&mut self) {
        self.dispatch(Action::Reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::validation::{INVALID_EMAIL, NAME_REQUIRED};
    use crate::wizard::view::{StepBody, WizardView};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<Transition>>>);

    impl TransitionObserver for Recorder {
        fn on_transition(&mut self, transition: &Transition) {
            self.0.borrow_mut().push(*transition);
        }
    }

    #[test]
    fn test_missing_name_blocks_advance() {
        let mut wizard = Wizard::new();
        wizard.update_field(Field::Email, "a@b.com");

        assert_eq!(wizard.advance(), Advance::Rejected);
        assert_eq!(wizard.state().step, Step::Personal);
        assert_eq!(wizard.state().errors.message(Field::Name), Some(NAME_REQUIRED));
        assert!(!wizard.state().errors.has_error(Field::Email));
    }

    #[test]
    fn test_bad_email_blocks_advance() {
        let mut wizard = Wizard::new();
        wizard.update_field(Field::Name, "Bob");
        wizard.update_field(Field::Email, "bad");

        assert_eq!(wizard.advance(), Advance::Rejected);
        assert_eq!(wizard.state().errors.message(Field::Email), Some(INVALID_EMAIL));
        assert!(!wizard.state().errors.has_error(Field::Name));

        wizard.update_field(Field::Email, "still bad");
        assert!(wizard.state().errors.is_empty());
    }

    #[test]
    fn test_happy_path() {
        let mut wizard = Wizard::new();
        wizard.update_field(Field::Name, "Alice");
        wizard.update_field(Field::Email, "a@b.com");
        assert_eq!(wizard.advance(), Advance::Advanced(Step::Account));

        wizard.update_field(Field::Username, "bobby");
        wizard.update_field(Field::Password, "secret");
        assert_eq!(wizard.advance(), Advance::Advanced(Step::Review));

        let WizardView::Editing(view) = wizard.view() else {
            panic!("expected editing view");
        };
        let StepBody::Review(lines) = view.body else {
            panic!("expected review body");
        };
        let values: Vec<&str> = lines.iter().map(|l| l.value).collect();
        assert_eq!(values, vec!["Alice", "a@b.com", "bobby"]);

        assert!(wizard.submit());
        assert!(wizard.state().is_submitted);
        assert_eq!(wizard.advance(), Advance::Unavailable);
    }

    #[test]
    fn test_back_from_first_step_refused() {
        let mut wizard = Wizard::new();
        assert!(!wizard.back());
        assert_eq!(wizard.state(), &WizardState::initial());
    }

    #[test]
    fn test_back_keeps_entered_data() {
        let mut wizard = Wizard::new();
        wizard.update_field(Field::Name, "Alice");
        wizard.update_field(Field::Email, "a@b.com");
        wizard.advance();
        assert!(wizard.back());
        assert_eq!(wizard.state().step, Step::Personal);
        assert_eq!(wizard.state().form.name(), "Alice");
    }

    #[test]
    fn test_submit_outside_review_ignored() {
        let mut wizard = Wizard::new();
        assert!(!wizard.submit());
        assert!(!wizard.state().is_submitted);
    }

    #[test]
    fn test_reset_after_submit() {
        let mut wizard = Wizard::new();
        wizard.update_field(Field::Name, "Alice");
        wizard.update_field(Field::Email, "a@b.com");
        wizard.advance();
        wizard.update_field(Field::Username, "abc");
        wizard.update_field(Field::Password, "123456");
        wizard.advance();
        wizard.submit();

        wizard.reset();
        assert_eq!(wizard.state(), &WizardState::initial());
    }

    #[test]
    fn test_next_gate() {
        let mut wizard = Wizard::new();
        assert!(wizard.is_next_disabled());
        wizard.update_field(Field::Name, "x");
        wizard.update_field(Field::Email, "y");
        assert!(!wizard.is_next_disabled());
    }

    #[test]
    fn test_observer_sees_transitions() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut wizard = Wizard::new().with_observer(Box::new(Recorder(Rc::clone(&log))));

        wizard.update_field(Field::Name, "Alice");
        wizard.advance();

        let seen = log.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].kind, ActionKind::UpdateField);
        assert_eq!(seen[0].field, Some(Field::Name));
        assert_eq!(seen[1].kind, ActionKind::SetErrors);
        assert_eq!(seen[1].from, Step::Personal);
        assert_eq!(seen[1].to, Step::Personal);
    }
}
