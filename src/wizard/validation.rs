//! Per-step field validation
//!
//! Two separate checks guard the Next control:
//!
//! - [`is_next_disabled`] is a coarse "every field on this step is non-empty"
//!   gate that decides whether the control can be activated at all.
//! - [`validate_step`] is the stricter check run when it is activated. Its
//!   result either lets the step advance or becomes the new error map.
//!
//! The length rules reject values *shorter* than the minimum, so a username
//! of exactly 3 characters and a password of exactly 6 pass even though the
//! messages read "more than". Lengths are UTF-16 code units, so a character
//! outside the Basic Multilingual Plane (most emoji) counts as two.

use once_cell::sync::Lazy;
use regex::Regex;

use super::state::{ErrorMap, Field, FormData, Step};

pub const NAME_REQUIRED: &str = "Name is required";
pub const INVALID_EMAIL: &str = "Invalid email format";
pub const USERNAME_TOO_SHORT: &str = "Username must be more than 3 characters";
pub const PASSWORD_TOO_SHORT: &str = "Password must be more than 6 characters";

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

/// Non-whitespace local part, `@`, and a non-whitespace domain containing a `.`
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("Failed to compile email regex"));

/// Loose email check, unanchored
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Length in UTF-16 code units
fn text_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Whether a value is empty once surrounding whitespace is removed
///
/// The byte order mark counts as whitespace; U+0085 does not.
fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}'))
        .is_empty()
}

/// Validate the fields of `step`, returning every failure at once
pub fn validate_step(step: Step, form: &FormData) -> ErrorMap {
    let mut errors = ErrorMap::new();

    match step {
        Step::Personal => {
            if is_blank(form.name()) {
                errors.insert(Field::Name, NAME_REQUIRED);
            }
            if !is_valid_email(form.email()) {
                errors.insert(Field::Email, INVALID_EMAIL);
            }
        }
        Step::Account => {
            if text_length(form.username()) < MIN_USERNAME_LEN {
                errors.insert(Field::Username, USERNAME_TOO_SHORT);
            }
            if text_length(form.password()) < MIN_PASSWORD_LEN {
                errors.insert(Field::Password, PASSWORD_TOO_SHORT);
            }
        }
        Step::Review => {}
    }

    errors
}

/// Whether the Next control is disabled on `step`
///
/// Only emptiness is checked here; whitespace counts as content.
pub fn is_next_disabled(step: Step, form: &FormData) -> bool {
    step.fields().iter().any(|field| form.get(*field).is_empty())
}
