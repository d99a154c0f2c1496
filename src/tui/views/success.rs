//! Success view
//!
//! Replaces the whole wizard once the registration has been submitted.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::WizardLayout;
use crate::wizard::view::SuccessView;

use super::step::render_buttons;

/// Render the confirmation screen
pub fn render(frame: &mut Frame, app: &App, view: &SuccessView, layout: &WizardLayout) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(layout.card);
    frame.render_widget(block, layout.card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Heading
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Message
            Constraint::Min(0),
        ])
        .split(inner);

    let heading = Paragraph::new(Line::from(Span::styled(
        view.heading,
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[1]);

    let message = Paragraph::new(view.message.as_str()).alignment(Alignment::Center);
    frame.render_widget(message, chunks[3]);

    render_buttons(frame, app.focus, &[view.button], layout.buttons);
}
