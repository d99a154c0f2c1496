//! Terminal User Interface module
//!
//! Draws the registration wizard with ratatui and feeds key presses back
//! into the wizard session as actions.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
