//! Line-oriented input and output
//!
//! The plain session talks to the user only through [`Prompter`], so the
//! same flow runs against a real terminal or a scripted test double.

use std::io::{self, BufRead, Write};

use crate::error::{WizardError, WizardResult};

/// Source of answers and sink for messages
pub trait Prompter {
    /// Ask for a line of text; `None` means input has ended
    fn prompt_line(&mut self, prompt: &str) -> WizardResult<Option<String>>;

    /// Ask for a line without echoing it
    fn prompt_secret(&mut self, prompt: &str) -> WizardResult<Option<String>>;

    /// Print a line of output
    fn say(&mut self, text: &str) -> WizardResult<()>;
}

/// Prompter backed by stdin/stdout, with `rpassword` for secrets
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn prompt_line(&mut self, prompt: &str) -> WizardResult<Option<String>> {
        print!("{}", prompt);
        io::stdout()
            .flush()
            .map_err(|e| WizardError::Io(e.to_string()))?;

        let mut input = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(|e| WizardError::Io(e.to_string()))?;
        if read == 0 {
            return Ok(None);
        }

        Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt_secret(&mut self, prompt: &str) -> WizardResult<Option<String>> {
        match rpassword::prompt_password(prompt) {
            Ok(secret) => Ok(Some(secret)),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(WizardError::Io(format!("Failed to read password: {}", e))),
        }
    }

    fn say(&mut self, text: &str) -> WizardResult<()> {
        println!("{}", text);
        Ok(())
    }
}
