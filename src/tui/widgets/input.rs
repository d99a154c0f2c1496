//! Text input widget
//!
//! A single-line text input with a character-indexed cursor and optional
//! masking for secret values. Text wider than the input scrolls so the
//! cursor stays visible.

use zeroize::Zeroize;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A simple text input widget
#[derive(Debug, Clone)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position, in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
    /// Character drawn in place of each content character
    pub mask: Option<char>,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            focused: false,
            placeholder: String::new(),
            label: String::new(),
            mask: None,
        }
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Mask the content with `mask`
    pub fn masked(mut self, mask: char) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Set content, placing the cursor at the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_len();
        self
    }

    /// Place the cursor, clamped to the content length
    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor.min(self.char_len());
        self
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Text as it appears on screen
    pub fn display_text(&self) -> String {
        match self.mask {
            Some(mask) => std::iter::repeat(mask).take(self.char_len()).collect(),
            None => self.content.clone(),
        }
    }

    /// First visible character when `width` cells are available
    ///
    /// Only a focused input scrolls; one cell is kept for the cursor.
    fn scroll_offset(&self, width: usize) -> usize {
        if !self.focused || width == 0 {
            return 0;
        }
        (self.cursor + 1).saturating_sub(width)
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TextInput {
    fn drop(&mut self) {
        // Inputs are rebuilt from the form on every frame, password included
        self.content.zeroize();
    }
}

impl Widget for TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width: u16 = if self.label.is_empty() {
            0
        } else {
            u16::try_from(self.label.chars().count())
                .unwrap_or(u16::MAX)
                .saturating_add(2)
        };

        let input_start = area.x.saturating_add(label_width);
        let input_width = area.width.saturating_sub(label_width);

        if !self.label.is_empty() {
            let label_line = Line::from(vec![
                Span::styled(self.label.as_str(), Style::default().fg(Color::Cyan)),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width);
        }

        let showing_placeholder = self.content.is_empty() && !self.focused;
        let offset = self.scroll_offset(input_width as usize);
        let display_text: String = if showing_placeholder {
            self.placeholder.clone()
        } else {
            self.display_text().chars().skip(offset).collect()
        };

        let text_style = if showing_placeholder {
            Style::default().fg(Color::DarkGray)
        } else if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Yellow)
        };

        buf.set_stringn(
            input_start,
            area.y,
            &display_text,
            input_width as usize,
            text_style,
        );

        if self.focused && input_width > 0 {
            let column = self.cursor - offset;
            let cursor_x = u16::try_from(column)
                .map(|c| input_start.saturating_add(c))
                .unwrap_or(u16::MAX);
            if cursor_x < area.right() {
                let cursor_char = display_text.chars().nth(column).unwrap_or('_');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "abc".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "abc");
        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "ac");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new().content("héllo");
        assert_eq!(input.cursor, 5);
        input.move_start();
        input.move_right();
        input.delete();
        assert_eq!(input.value(), "hllo");
        input.insert('é');
        assert_eq!(input.value(), "héllo");
    }

    #[test]
    fn test_cursor_clamped() {
        let input = TextInput::new().content("ab").cursor(10);
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn test_mask() {
        let input = TextInput::new().content("secret").masked('*');
        assert_eq!(input.display_text(), "******");
        assert_eq!(input.value(), "secret");
    }

    fn render_row(input: TextInput, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        input.render(area, &mut buf);
        buf.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_long_value_scrolls_to_cursor() {
        let input = TextInput::new()
            .label("Name")
            .content("abcdefghijklmnopqrstuvwxyz")
            .focused(true);
        // 20 columns minus "Name: " leaves 14 cells: 13 characters and the cursor
        assert_eq!(render_row(input, 20), "Name: nopqrstuvwxyz_");
    }

    #[test]
    fn test_scroll_follows_cursor_back() {
        let input = TextInput::new()
            .label("Name")
            .content("abcdefghijklmnopqrstuvwxyz")
            .cursor(2)
            .focused(true);
        assert_eq!(render_row(input, 20), "Name: abcdefghijklmn");
    }

    #[test]
    fn test_unfocused_long_value_shows_start() {
        let input = TextInput::new()
            .label("Name")
            .content("abcdefghijklmnopqrstuvwxyz");
        assert_eq!(render_row(input, 20), "Name: abcdefghijklmn");
    }

    #[test]
    fn test_very_long_value_renders() {
        let input = TextInput::new()
            .label("Name")
            .content("x".repeat(70_000))
            .focused(true);
        let row = render_row(input, 20);
        assert!(row.ends_with("xxxxx_"));
    }

    #[test]
    fn test_render_masked_value() {
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        TextInput::new()
            .label("Password")
            .content("abc")
            .masked('*')
            .render(area, &mut buf);

        let rendered: String = buf.content.iter().map(|c| c.symbol()).collect();
        assert!(rendered.starts_with("Password: ***"));
        assert!(!rendered.contains("abc"));
    }
}
