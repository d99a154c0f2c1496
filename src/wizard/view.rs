//! Framework-agnostic view model
//!
//! Describes what a front end must show for a given state: which inputs,
//! which buttons (and whether Next is enabled), the progress indicator and
//! the review or confirmation text. The TUI and the line-prompt mode both
//! render from this.

use super::state::{Field, Step, WizardState};
use super::validation::is_next_disabled;

/// Controls in the button row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Back,
    Next,
    Submit,
    RegisterAnother,
}

impl Button {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Back => "Back",
            Self::Next => "Next",
            Self::Submit => "Submit",
            Self::RegisterAnother => "Register Another",
        }
    }
}

/// A button as it should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonView {
    pub button: Button,
    pub enabled: bool,
}

/// "Step N of 3" indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub current: u8,
    pub total: u8,
}

impl Progress {
    /// Fraction of the wizard reached, in 0.0..=1.0
    pub fn ratio(&self) -> f64 {
        f64::from(self.current) / f64::from(self.total)
    }

    pub fn label(&self) -> String {
        format!("Step {} of {}", self.current, self.total)
    }
}

/// An editable input with its current value and error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView<'a> {
    pub field: Field,
    pub value: &'a str,
    pub error: Option<&'a str>,
}

/// A label/value row on the review step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewLine<'a> {
    pub label: &'static str,
    pub value: &'a str,
}

/// Content of the active step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepBody<'a> {
    Inputs(Vec<InputView<'a>>),
    Review(Vec<ReviewLine<'a>>),
}

/// Everything shown while the wizard is being filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView<'a> {
    pub step: Step,
    pub progress: Progress,
    pub body: StepBody<'a>,
    pub buttons: Vec<ButtonView>,
}

/// Terminal success screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessView {
    pub heading: &'static str,
    pub message: String,
    pub button: ButtonView,
}

/// What to draw for a state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardView<'a> {
    Editing(StepView<'a>),
    Submitted(SuccessView),
}

/// Fields listed on the review step; the password is left out
pub const REVIEW_FIELDS: [Field; 3] = [Field::Name, Field::Email, Field::Username];

/// Confirmation text shown after submission
pub fn confirmation_message(name: &str) -> String {
    format!("Registration completed for {}.", name)
}

/// Buttons visible on `step`, given whether Next is disabled
pub fn button_row(step: Step, next_disabled: bool) -> Vec<ButtonView> {
    let mut buttons = Vec::with_capacity(2);
    if step.number() > 1 {
        buttons.push(ButtonView {
            button: Button::Back,
            enabled: true,
        });
    }
    if step.number() < Step::COUNT {
        buttons.push(ButtonView {
            button: Button::Next,
            enabled: !next_disabled,
        });
    } else {
        buttons.push(ButtonView {
            button: Button::Submit,
            enabled: true,
        });
    }
    buttons
}

impl<'a> WizardView<'a> {
    /// Build the view for a state
    pub fn from_state(state: &'a WizardState) -> Self {
        if state.is_submitted {
            return Self::Submitted(SuccessView {
                heading: "Success!",
                message: confirmation_message(state.form.name()),
                button: ButtonView {
                    button: Button::RegisterAnother,
                    enabled: true,
                },
            });
        }

        let step = state.step;
        let body = match step {
            Step::Review => StepBody::Review(
                REVIEW_FIELDS
                    .iter()
                    .map(|field| ReviewLine {
                        label: field.label(),
                        value: state.form.get(*field),
                    })
                    .collect(),
            ),
            _ => StepBody::Inputs(
                step.fields()
                    .iter()
                    .map(|field| InputView {
                        field: *field,
                        value: state.form.get(*field),
                        error: state.errors.message(*field),
                    })
                    .collect(),
            ),
        };

        Self::Editing(StepView {
            step,
            progress: Progress {
                current: step.number(),
                total: Step::COUNT,
            },
            body,
            buttons: button_row(step, is_next_disabled(step, &state.form)),
        })
    }

    /// All buttons in this view, in display order
    pub fn buttons(&self) -> Vec<ButtonView> {
        match self {
            Self::Editing(view) => view.buttons.clone(),
            Self::Submitted(view) => vec![view.button],
        }
    }

    /// Whether `button` is shown
    pub fn shows(&self, button: Button) -> bool {
        self.buttons().iter().any(|b| b.button == button)
    }

    /// Whether `button` is shown and can be activated
    pub fn is_enabled(&self, button: Button) -> bool {
        self.buttons()
            .iter()
            .any(|b| b.button == button && b.enabled)
    }
}
