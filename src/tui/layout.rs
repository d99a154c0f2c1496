//! Layout definitions for the TUI
//!
//! The wizard is drawn in a fixed-width column centred on the screen:
//! title, progress gauge, step card, button row. A status bar runs along
//! the bottom of the terminal.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the wizard column
pub const COLUMN_WIDTH: u16 = 64;

/// Height of the wizard column
pub const COLUMN_HEIGHT: u16 = 22;

/// Layout regions for the wizard screen
pub struct WizardLayout {
    /// Title line
    pub title: Rect,
    /// Progress gauge
    pub progress: Rect,
    /// Step content card
    pub card: Rect,
    /// Button row
    pub buttons: Rect,
    /// Status bar at the bottom of the terminal
    pub status_bar: Rect,
}

impl WizardLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Wizard area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let column = centered_rect_fixed(COLUMN_WIDTH, COLUMN_HEIGHT, vertical[0]);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(3), // Progress
                Constraint::Min(6),    // Card
                Constraint::Length(3), // Buttons
            ])
            .split(column);

        Self {
            title: chunks[0],
            progress: chunks[1],
            card: chunks[2],
            buttons: chunks[3],
            status_bar: vertical[1],
        }
    }
}

/// Create a fixed-size centered rect
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
