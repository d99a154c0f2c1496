//! Plain wizard session
//!
//! Walks the wizard one prompt at a time. Each step asks for its fields,
//! then offers the step's controls; everything goes through the same
//! `Wizard` controller as the TUI.

use tabled::{settings::Style, Table, Tabled};
use tracing::info;
use zeroize::Zeroizing;

use crate::error::WizardResult;
use crate::wizard::view::{ReviewLine, StepBody, SuccessView};
use crate::wizard::{Advance, Field, Step, Wizard, WizardView};

use super::prompter::Prompter;

/// How a plain session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlainOutcome {
    /// Number of registrations submitted during the session
    pub registrations: usize,
    /// Whether the user quit (or input ran out) before finishing
    pub cancelled: bool,
}

#[derive(Tabled)]
struct ReviewRow {
    #[tabled(rename = "Field")]
    label: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// Render review lines as a table
pub fn review_table(lines: &[ReviewLine]) -> String {
    let rows: Vec<ReviewRow> = lines
        .iter()
        .map(|line| ReviewRow {
            label: line.label,
            value: line.value.to_string(),
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Choice made at the end of a step
enum Control {
    Next,
    Back,
    Submit,
    Quit,
    Unknown,
}

fn parse_control(answer: &str, default: Control) -> Control {
    match answer.trim().to_lowercase().as_str() {
        "" => default,
        "n" | "next" => Control::Next,
        "b" | "back" => Control::Back,
        "s" | "submit" => Control::Submit,
        "q" | "quit" => Control::Quit,
        _ => Control::Unknown,
    }
}

/// Line-prompt front end for a wizard session
pub struct PlainSession<P: Prompter> {
    prompter: P,
    wizard: Wizard,
    registrations: usize,
}

impl<P: Prompter> PlainSession<P> {
    pub fn new(prompter: P, wizard: Wizard) -> Self {
        Self {
            prompter,
            wizard,
            registrations: 0,
        }
    }

    /// Run until the user quits or declines another registration
    pub fn run(&mut self) -> WizardResult<PlainOutcome> {
        self.prompter.say("")?;
        self.prompter.say("===========================================")?;
        self.prompter.say("  Registration Wizard")?;
        self.prompter.say("===========================================")?;

        loop {
            let keep_going = if self.wizard.state().is_submitted {
                self.success_screen()?
            } else {
                match self.wizard.state().step {
                    Step::Personal | Step::Account => self.input_step()?,
                    Step::Review => self.review_step()?,
                }
            };

            if !keep_going {
                let outcome = PlainOutcome {
                    registrations: self.registrations,
                    cancelled: !self.wizard.state().is_submitted,
                };
                info!(
                    registrations = outcome.registrations,
                    cancelled = outcome.cancelled,
                    "plain session ended"
                );
                return Ok(outcome);
            }
        }
    }

    fn step_header(&mut self) -> WizardResult<()> {
        let step = self.wizard.state().step;
        self.prompter.say("")?;
        self.prompter
            .say(&format!("Step {} of {}: {}", step.number(), Step::COUNT, step.title()))?;
        self.prompter.say("------------------------------------------")?;
        Ok(())
    }

    /// Ask for one field; an empty answer keeps the current value
    fn ask_field(&mut self, field: Field) -> WizardResult<bool> {
        if let Some(error) = self.wizard.state().errors.message(field) {
            let line = format!("  ! {}", error);
            self.prompter.say(&line)?;
        }

        let current = Zeroizing::new(self.wizard.state().form.get(field).to_string());
        let answer = if field.is_secret() {
            let prompt = if current.is_empty() {
                format!("{}: ", field.label())
            } else {
                format!("{} [unchanged]: ", field.label())
            };
            self.prompter.prompt_secret(&prompt)?
        } else if current.is_empty() {
            self.prompter.prompt_line(&format!("{}: ", field.label()))?
        } else {
            self.prompter
                .prompt_line(&format!("{} [{}]: ", field.label(), current.as_str()))?
        };

        let Some(answer) = answer else {
            return Ok(false);
        };
        if !answer.is_empty() {
            self.wizard.update_field(field, answer);
        }
        Ok(true)
    }

    fn input_step(&mut self) -> WizardResult<bool> {
        self.step_header()?;

        let step = self.wizard.state().step;
        for field in step.fields() {
            if !self.ask_field(*field)? {
                return Ok(false);
            }
        }

        let prompt = if step.is_first() {
            "[n]ext, [q]uit [n]: "
        } else {
            "[n]ext, [b]ack, [q]uit [n]: "
        };
        let Some(answer) = self.prompter.prompt_line(prompt)? else {
            return Ok(false);
        };

        match parse_control(&answer, Control::Next) {
            Control::Next => {
                if self.wizard.is_next_disabled() {
                    self.prompter.say("Fill in every field to continue.")?;
                } else if self.wizard.advance() == Advance::Rejected {
                    self.prompter.say("Please fix the following:")?;
                }
            }
            Control::Back if !step.is_first() => {
                self.wizard.back();
            }
            Control::Quit => return Ok(false),
            _ => self.prompter.say("Unrecognised choice.")?,
        }
        Ok(true)
    }

    fn review_step(&mut self) -> WizardResult<bool> {
        self.step_header()?;

        let table = match self.wizard.view() {
            WizardView::Editing(view) => match view.body {
                StepBody::Review(lines) => review_table(&lines),
                StepBody::Inputs(_) => String::new(),
            },
            WizardView::Submitted(_) => String::new(),
        };
        self.prompter.say(&table)?;

        let Some(answer) = self.prompter.prompt_line("[s]ubmit, [b]ack, [q]uit [s]: ")? else {
            return Ok(false);
        };

        match parse_control(&answer, Control::Submit) {
            Control::Submit => {
                if self.wizard.submit() {
                    self.registrations += 1;
                }
            }
            Control::Back => {
                self.wizard.back();
            }
            Control::Quit => return Ok(false),
            _ => self.prompter.say("Unrecognised choice.")?,
        }
        Ok(true)
    }

    fn success_screen(&mut self) -> WizardResult<bool> {
        let message = match self.wizard.view() {
            WizardView::Submitted(SuccessView { heading, message, .. }) => {
                format!("{} {}", heading, message)
            }
            WizardView::Editing(_) => String::new(),
        };
        self.prompter.say("")?;
        self.prompter.say(&message)?;

        let Some(answer) = self.prompter.prompt_line("Register another? (yes/no) [no]: ")? else {
            return Ok(false);
        };

        let answer = answer.trim().to_lowercase();
        if answer == "y" || answer == "yes" {
            self.wizard.reset();
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
