//! Status bar view
//!
//! Shows the current status message, or key hints for the active screen

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

const FORM_HINTS: &str = " Tab:Move ^N:Next ^B:Back ^S:Submit Esc:Quit ";
const SUCCESS_HINTS: &str = " Enter/r:Register another  q:Quit ";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    if let Some(ref message) = app.status_message {
        spans.push(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = if app.wizard.state().is_submitted {
        SUCCESS_HINTS
    } else {
        FORM_HINTS
    };

    // Right-align the hints
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use crate::config::Settings;
    use crate::tui::app::App;
    use crate::tui::views::testing::draw;
    use crate::wizard::Wizard;

    #[test]
    fn test_status_message_shown() {
        let settings = Settings::default();
        let mut app = App::new(Wizard::new(), &settings);
        app.go_next();

        let screen = draw(&app);
        let last_line = screen.lines().last().unwrap();
        assert!(last_line.contains("Fill in every field to continue"));
        assert!(last_line.contains("Esc:Quit"));
    }
}
