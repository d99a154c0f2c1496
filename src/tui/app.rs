//! Application state for the TUI
//!
//! The App struct holds the wizard session plus the purely visual state the
//! wizard itself does not track: keyboard focus, per-field cursors and the
//! status line.

use zeroize::Zeroizing;

use crate::config::settings::Settings;
use crate::wizard::{Advance, Button, Field, Step, Wizard};

use super::widgets::TextInput;

/// What currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input(Field),
    Button(Button),
}

/// Main application state
pub struct App<'a> {
    /// The wizard session
    pub wizard: Wizard,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Focused input or button
    pub focus: Focus,

    /// Cursor position per field, in characters
    cursors: [usize; 4],

    /// Status message to display
    pub status_message: Option<String>,
}

fn slot(field: Field) -> usize {
    match field {
        Field::Name => 0,
        Field::Email => 1,
        Field::Username => 2,
        Field::Password => 3,
    }
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(wizard: Wizard, settings: &'a Settings) -> Self {
        let mut app = Self {
            wizard,
            settings,
            should_quit: false,
            focus: Focus::Input(Field::Name),
            cursors: [0; 4],
            status_message: None,
        };
        app.reset_focus();
        app
    }

    /// Request the application to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Focusable targets on the current screen, in tab order
    pub fn focus_targets(&self) -> Vec<Focus> {
        let view = self.wizard.view();
        let mut targets: Vec<Focus> = if self.wizard.state().is_submitted {
            Vec::new()
        } else {
            self.wizard
                .state()
                .step
                .fields()
                .iter()
                .map(|f| Focus::Input(*f))
                .collect()
        };
        targets.extend(view.buttons().into_iter().map(|b| Focus::Button(b.button)));
        targets
    }

    /// Put focus on the first target of the current screen
    pub fn reset_focus(&mut self) {
        if let Some(first) = self.focus_targets().first() {
            self.focus = *first;
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        let targets = self.focus_targets();
        if targets.is_empty() {
            return;
        }
        let current = targets.iter().position(|t| *t == self.focus);
        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % targets.len(),
            (Some(i), false) => (i + targets.len() - 1) % targets.len(),
            (None, _) => 0,
        };
        self.focus = targets[next];
    }

    /// Move focus forward (Tab)
    pub fn focus_next(&mut self) {
        self.cycle_focus(true);
    }

    /// Move focus backward (Shift+Tab)
    pub fn focus_prev(&mut self) {
        self.cycle_focus(false);
    }

    /// Field whose input currently has focus
    pub fn focused_field(&self) -> Option<Field> {
        match self.focus {
            Focus::Input(field) => Some(field),
            Focus::Button(_) => None,
        }
    }

    /// Cursor position within a field
    pub fn cursor(&self, field: Field) -> usize {
        self.cursors[slot(field)]
    }

    /// Input widget for a field, reflecting the current value and cursor
    pub fn input_for(&self, field: Field) -> TextInput {
        let mut input = TextInput::new()
            .label(field.label())
            .placeholder(field.label())
            .content(self.wizard.state().form.get(field))
            .focused(self.focus == Focus::Input(field));
        input = input.cursor(self.cursor(field));
        if field.is_secret() {
            input = input.masked(self.settings.mask_char);
        }
        input
    }

    /// Apply an edit to the focused input and dispatch the new value
    ///
    /// A changed value also clears the status line, since the edit has
    /// already cleared that field's error.
    pub fn edit_focused(&mut self, edit: impl FnOnce(&mut TextInput)) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let mut input = self.input_for(field);
        let before = Zeroizing::new(input.value().to_string());
        edit(&mut input);

        self.cursors[slot(field)] = input.cursor;
        if input.value() != before.as_str() {
            self.wizard.update_field(field, input.value());
            self.clear_status();
        }
    }

    /// Activate the Next control
    pub fn go_next(&mut self) {
        if self.wizard.state().is_submitted || self.wizard.state().step.is_last() {
            return;
        }
        if self.wizard.is_next_disabled() {
            self.set_status("Fill in every field to continue");
            return;
        }
        match self.wizard.advance() {
            Advance::Advanced(step) => {
                self.clear_status();
                self.enter_step(step);
            }
            Advance::Rejected => {
                self.set_status("Please fix the highlighted fields");
                if let Some((field, _)) = self.wizard.state().errors.iter().next() {
                    self.focus = Focus::Input(field);
                }
            }
            Advance::Unavailable => {}
        }
    }

    /// Activate the Back control
    pub fn go_back(&mut self) {
        if self.wizard.back() {
            self.clear_status();
            let step = self.wizard.state().step;
            self.enter_step(step);
        }
    }

    /// Activate the Submit control
    pub fn submit(&mut self) {
        if self.wizard.state().step != Step::Review || self.wizard.state().is_submitted {
            return;
        }
        if self.wizard.submit() {
            self.clear_status();
            self.reset_focus();
        }
    }

    /// Activate the Register Another control
    pub fn register_another(&mut self) {
        self.wizard.reset();
        self.cursors = [0; 4];
        self.clear_status();
        self.reset_focus();
    }

    /// Enter on the focused target
    pub fn activate(&mut self) {
        match self.focus {
            Focus::Input(_) => self.focus_next(),
            Focus::Button(Button::Back) => self.go_back(),
            Focus::Button(Button::Next) => self.go_next(),
            Focus::Button(Button::Submit) => self.submit(),
            Focus::Button(Button::RegisterAnother) => self.register_another(),
        }
    }

    fn enter_step(&mut self, step: Step) {
        for field in step.fields() {
            let len = self.wizard.state().form.get(*field).chars().count();
            self.cursors[slot(*field)] = len;
        }
        self.reset_focus();
    }
}
