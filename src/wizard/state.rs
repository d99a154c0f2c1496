//! Wizard state
//!
//! The complete state of one wizard session: which step is showing, the
//! entered form data, per-field validation messages and whether the
//! registration has been submitted.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A form field collected by the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Username,
    Password,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Username, Field::Password];

    /// Machine key used in messages and the journal
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Username => "username",
            Self::Password => "password",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Username => "Username",
            Self::Password => "Password",
        }
    }

    /// Whether the value must never be echoed back
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// One of the three wizard screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// Step 1: name and email
    #[default]
    Personal,
    /// Step 2: username and password
    Account,
    /// Step 3: read-only review
    Review,
}

impl Step {
    /// Number of steps in the wizard
    pub const COUNT: u8 = 3;

    /// 1-based step number
    pub fn number(&self) -> u8 {
        match self {
            Self::Personal => 1,
            Self::Account => 2,
            Self::Review => 3,
        }
    }

    /// Step for a 1-based number
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Personal),
            2 => Some(Self::Account),
            3 => Some(Self::Review),
            _ => None,
        }
    }

    /// The following step, if any
    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// The preceding step, if any
    pub fn previous(&self) -> Option<Self> {
        Self::from_number(self.number().saturating_sub(1))
    }

    /// Heading shown above the step content
    pub fn title(&self) -> &'static str {
        match self {
            Self::Personal => "Personal Details",
            Self::Account => "Account Details",
            Self::Review => "Review & Submit",
        }
    }

    /// Editable fields on this step
    pub fn fields(&self) -> &'static [Field] {
        match self {
            Self::Personal => &[Field::Name, Field::Email],
            Self::Account => &[Field::Username, Field::Password],
            Self::Review => &[],
        }
    }

    pub fn is_first(&self) -> bool {
        self.previous().is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}: {}", self.number(), self.title())
    }
}

/// Values entered into the form
///
/// Holds a password, so the buffers are wiped when the value is dropped and
/// the `Debug` output redacts it.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct FormData {
    name: String,
    email: String,
    username: String,
    password: String,
}

impl FormData {
    /// Create empty form data
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value of a field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Username => &self.username,
            Field::Password => &self.password,
        }
    }

    /// Overwrite the value of a field
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Username => &mut self.username,
            Field::Password => &mut self.password,
        };
        slot.zeroize();
        *slot = value.into();
    }

    /// Builder-style setter
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for FormData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormData")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Validation messages keyed by field
///
/// A field with no entry has no error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMap(BTreeMap<Field, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field, replacing any previous one
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            self.0.remove(&field);
        } else {
            self.0.insert(field, message);
        }
    }

    /// Builder-style insert
    pub fn with(mut self, field: Field, message: impl Into<String>) -> Self {
        self.insert(field, message);
        self
    }

    /// Drop the message for a field
    pub fn clear_field(&mut self, field: Field) {
        self.0.remove(&field);
    }

    /// Message for a field, if it has one
    pub fn message(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over (field, message) pairs in form order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

/// Full state of a wizard session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    /// Currently displayed step
    pub step: Step,
    /// Values entered so far
    pub form: FormData,
    /// Validation messages from the last failed advance
    pub errors: ErrorMap,
    /// Whether the registration has been submitted
    pub is_submitted: bool,
}

impl WizardState {
    /// The state every session starts from
    pub fn initial() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = WizardState::initial();
        assert_eq!(state.step, Step::Personal);
        assert_eq!(state.step.number(), 1);
        for field in Field::ALL {
            assert_eq!(state.form.get(field), "");
        }
        assert!(state.errors.is_empty());
        assert!(!state.is_submitted);
    }

    #[test]
    fn test_step_navigation_bounds() {
        assert_eq!(Step::Personal.next(), Some(Step::Account));
        assert_eq!(Step::Account.next(), Some(Step::Review));
        assert_eq!(Step::Review.next(), None);
        assert_eq!(Step::Personal.previous(), None);
        assert_eq!(Step::Review.previous(), Some(Step::Account));
        assert!(Step::Personal.is_first());
        assert!(Step::Review.is_last());
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(4), None);
    }

    #[test]
    fn test_step_display() {
        assert_eq!(Step::Account.to_string(), "Step 2: Account Details");
        assert_eq!(Step::Review.fields(), &[] as &[Field]);
    }

    #[test]
    fn test_field_keys() {
        assert_eq!(Field::Email.to_string(), "email");
        assert_eq!(Field::Username.label(), "Username");
        assert!(Field::Password.is_secret());
        assert!(!Field::Username.is_secret());
    }

    #[test]
    fn test_form_data_set_overwrites() {
        let mut form = FormData::new().with(Field::Name, "Alice");
        form.set(Field::Name, "Bob");
        assert_eq!(form.name(), "Bob");
        assert_eq!(form.email(), "");
    }

    #[test]
    fn test_form_data_debug_redacts_password() {
        let form = FormData::new().with(Field::Password, "hunter22");
        let debug = format!("{:?}", form);
        assert!(!debug.contains("hunter22"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_error_map_empty_message_means_no_error() {
        let mut errors = ErrorMap::new().with(Field::Name, "Name is required");
        assert_eq!(errors.message(Field::Name), Some("Name is required"));

        errors.insert(Field::Name, "");
        assert!(errors.message(Field::Name).is_none());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_error_map_iterates_in_form_order() {
        let errors = ErrorMap::new()
            .with(Field::Password, "p")
            .with(Field::Username, "u");
        let fields: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![Field::Username, Field::Password]);
    }
}
