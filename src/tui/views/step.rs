//! Wizard step view
//!
//! Draws the progress gauge, the active step's inputs (or the review list)
//! with per-field errors, and the button row.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::tui::app::{App, Focus};
use crate::tui::layout::WizardLayout;
use crate::wizard::view::{ButtonView, InputView, ReviewLine, StepBody, StepView};

/// Render the wizard while it is being filled in
pub fn render(frame: &mut Frame, app: &App, view: &StepView, layout: &WizardLayout) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Create your account",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(view.progress.ratio())
        .label(view.progress.label());
    frame.render_widget(gauge, layout.progress);

    let card = Block::default()
        .title(format!(" {} ", view.step))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = card.inner(layout.card);
    frame.render_widget(card, layout.card);

    match &view.body {
        StepBody::Inputs(inputs) => render_inputs(frame, app, inputs, inner),
        StepBody::Review(lines) => render_review(frame, lines, inner),
    }

    render_buttons(frame, app.focus, &view.buttons, layout.buttons);
}

/// Each input takes two rows: the field and its error line
fn render_inputs(frame: &mut Frame, app: &App, inputs: &[InputView], area: Rect) {
    let mut constraints = Vec::with_capacity(inputs.len() * 3 + 1);
    for _ in inputs {
        constraints.push(Constraint::Length(1)); // Input
        constraints.push(Constraint::Length(1)); // Error
        constraints.push(Constraint::Length(1)); // Spacer
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, input) in inputs.iter().enumerate() {
        frame.render_widget(app.input_for(input.field), chunks[i * 3]);

        if let Some(error) = input.error {
            let error_line = Paragraph::new(Line::from(Span::styled(
                format!("  {}", error),
                Style::default().fg(Color::Red),
            )));
            frame.render_widget(error_line, chunks[i * 3 + 1]);
        }
    }
}

fn render_review(frame: &mut Frame, lines: &[ReviewLine], area: Rect) {
    let text: Vec<Line> = lines
        .iter()
        .map(|line| {
            Line::from(vec![
                Span::styled(
                    format!("{}: ", line.label),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(line.value),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(text), area);
}

fn button_style(focused: bool, enabled: bool) -> Style {
    if !enabled {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

/// Render a row of buttons, centred
pub fn render_buttons(frame: &mut Frame, focus: Focus, buttons: &[ButtonView], area: Rect) {
    let mut spans = Vec::with_capacity(buttons.len() * 2);
    for (i, button) in buttons.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        let focused = focus == Focus::Button(button.button);
        spans.push(Span::styled(
            format!("[ {} ]", button.button.label()),
            button_style(focused, button.enabled),
        ));
    }

    let row = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(row, area);
}
