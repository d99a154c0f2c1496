//! Event handler for the TUI
//!
//! Routes keyboard events to the wizard screen or the success screen.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, Focus};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.wizard.state().is_submitted {
        handle_success_key(app, key)
    } else {
        handle_form_key(app, key)
    }
}

/// Handle keys on the success screen
fn handle_success_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => app.register_another(),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
    Ok(())
}

/// Handle keys while the wizard is being filled in
fn handle_form_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('n') => app.go_next(),
            KeyCode::Char('b') => app.go_back(),
            KeyCode::Char('s') => app.submit(),
            _ => {}
        }
        return Ok(());
    }

    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Enter => app.activate(),
        _ if matches!(app.focus, Focus::Input(_)) => handle_input_key(app, key),
        _ => {}
    }

    Ok(())
}

/// Handle editing keys for the focused input
fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
            app.edit_focused(|input| input.insert(c));
        }
        KeyCode::Backspace => app.edit_focused(|input| input.backspace()),
        KeyCode::Delete => app.edit_focused(|input| input.delete()),
        KeyCode::Left => app.edit_focused(|input| input.move_left()),
        KeyCode::Right => app.edit_focused(|input| input.move_right()),
        KeyCode::Home => app.edit_focused(|input| input.move_start()),
        KeyCode::End => app.edit_focused(|input| input.move_end()),
        _ => {}
    }
}
