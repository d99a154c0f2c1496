//! TUI Views module
//!
//! The wizard screen (one step at a time), the success screen that replaces
//! it after submission, and the status bar.

pub mod status_bar;
pub mod step;
pub mod success;

use ratatui::Frame;

use crate::wizard::WizardView;

use super::app::App;
use super::layout::WizardLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = WizardLayout::new(frame.area());

    match app.wizard.view() {
        WizardView::Editing(view) => step::render(frame, app, &view, &layout),
        WizardView::Submitted(view) => success::render(frame, app, &view, &layout),
    }

    status_bar::render(frame, app, layout.status_bar);
}
