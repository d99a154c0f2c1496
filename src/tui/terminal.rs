//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use tracing::info;

use crate::config::paths::WizardPaths;
use crate::config::settings::Settings;
use crate::error::WizardError;
use crate::journal::journaled_session;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode().map_err(tui_error("enable raw mode"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(tui_error("enter alternate screen"))?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).map_err(tui_error("create terminal"))?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode().map_err(tui_error("disable raw mode"))?;
    execute!(io::stdout(), LeaveAlternateScreen).map_err(tui_error("leave alternate screen"))?;
    Ok(())
}

fn tui_error(action: &'static str) -> impl FnOnce(io::Error) -> WizardError {
    move |e| WizardError::Tui(format!("Failed to {}: {}", action, e))
}

/// Run the TUI application
pub fn run_tui(settings: &Settings, paths: &WizardPaths) -> Result<()> {
    let mut terminal = init_terminal()?;
    info!("tui started");

    let mut app = App::new(journaled_session(settings, paths), settings);
    let events = EventHandler::new(settings.tick_rate());

    let result = run_loop(&mut terminal, &mut app, &events);

    // Restore even if the loop failed
    restore_terminal()?;
    info!("tui stopped");

    result
}

fn run_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        handle_event(app, events.next()?)?;

        if app.should_quit {
            return Ok(());
        }
    }
}
