//! Check CLI command
//!
//! Walks the wizard non-interactively with values given on the command line
//! and reports the first step that fails validation. This is a dry run: no
//! journal is attached.

use clap::Args;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::WizardResult;
use crate::wizard::view::StepBody;
use crate::wizard::{Advance, ErrorMap, Field, Step, Wizard, WizardView};

/// Values to run through the wizard
///
/// Wiped on drop; there is no `Debug` so the password cannot be printed.
#[derive(Args, Default, Zeroize, ZeroizeOnDrop)]
pub struct CheckArgs {
    /// Full name (step 1)
    #[arg(long, default_value = "")]
    pub name: String,
    /// Email address (step 1)
    #[arg(long, default_value = "")]
    pub email: String,
    /// Username (step 2)
    #[arg(long, default_value = "")]
    pub username: String,
    /// Password (step 2)
    #[arg(long, default_value = "", env = "SIGNUP_WIZARD_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Result of walking the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckReport {
    /// Every step passed; review lines in display order
    Passed(Vec<(&'static str, String)>),
    /// A step was blocked by the non-empty gate
    Incomplete { step: Step, missing: Vec<Field> },
    /// A step failed validation
    Invalid { step: Step, errors: ErrorMap },
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        matches!(self, Self::Passed(_))
    }

    /// Lines to print for this report
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Passed(review) => {
                let mut lines = vec!["All steps passed.".to_string()];
                lines.extend(review.iter().map(|(label, value)| format!("  {}: {}", label, value)));
                lines
            }
            Self::Incomplete { step, missing } => {
                let mut lines = vec![format!("{}: fill in every field to continue", step)];
                lines.extend(missing.iter().map(|field| format!("  {}: missing", field)));
                lines
            }
            Self::Invalid { step, errors } => {
                let mut lines = vec![format!("{}: validation failed", step)];
                lines.extend(errors.iter().map(|(field, msg)| format!("  {}: {}", field, msg)));
                lines
            }
        }
    }
}

/// Walk the wizard with `args`, stopping at the first step that cannot advance
pub fn run_check(args: &CheckArgs) -> CheckReport {
    let mut wizard = Wizard::new();
    for (field, value) in [
        (Field::Name, &args.name),
        (Field::Email, &args.email),
        (Field::Username, &args.username),
        (Field::Password, &args.password),
    ] {
        wizard.update_field(field, value.as_str());
    }

    while !wizard.state().step.is_last() {
        let step = wizard.state().step;
        if wizard.is_next_disabled() {
            let missing = step
                .fields()
                .iter()
                .copied()
                .filter(|f| wizard.state().form.get(*f).is_empty())
                .collect();
            return CheckReport::Incomplete { step, missing };
        }
        if wizard.advance() == Advance::Rejected {
            return CheckReport::Invalid {
                step,
                errors: wizard.state().errors.clone(),
            };
        }
    }

    let review = match wizard.view() {
        WizardView::Editing(view) => match view.body {
            StepBody::Review(lines) => lines
                .into_iter()
                .map(|line| (line.label, line.value.to_string()))
                .collect(),
            StepBody::Inputs(_) => Vec::new(),
        },
        WizardView::Submitted(_) => Vec::new(),
    };
    CheckReport::Passed(review)
}

/// Handle the check command; returns whether every step passed
pub fn handle_check_command(args: CheckArgs) -> WizardResult<bool> {
    let report = run_check(&args);
    for line in report.lines() {
        println!("{}", line);
    }
    Ok(report.passed())
}
