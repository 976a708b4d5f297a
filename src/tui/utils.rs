use ratatui::prelude::*;
use unicode_width::UnicodeWidthStr;

/// Text buffer with a character-indexed cursor, used for the search field.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct Input {
    text: String,
    cursor_position: usize,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an Input from text, with cursor at end
    pub fn with_text(text: String) -> Self {
        let cursor_position = text.chars().count();
        Self {
            text,
            cursor_position,
        }
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor_position.saturating_add(1);
        self.cursor_position = cursor_moved_right.clamp(0, self.text.chars().count());
    }

    pub fn move_cursor_left(&mut self) {
        let cursor_moved_left = self.cursor_position.saturating_sub(1);
        self.cursor_position = cursor_moved_left.clamp(0, self.text.chars().count());
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.text.chars().count();
    }

    pub fn enter_char(&mut self, c: char) {
        let index = self.byte_index(self.cursor_position);
        self.text.insert(index, c);
        self.move_cursor_right()
    }

    /// Remove the character left of the cursor
    pub fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let index = self.byte_index(self.cursor_position - 1);
        self.text.remove(index);
        self.move_cursor_left();
    }

    /// Remove the character under the cursor
    pub fn delete_char_forward(&mut self) {
        if self.cursor_position >= self.text.chars().count() {
            return;
        }
        let index = self.byte_index(self.cursor_position);
        self.text.remove(index);
    }

    /// Display width of the text left of the cursor
    pub fn cursor_display_width(&self) -> usize {
        let index = self.byte_index(self.cursor_position);
        UnicodeWidthStr::width(&self.text[..index])
    }

    fn byte_index(&self, char_position: usize) -> usize {
        self.text
            .char_indices()
            .map(|(i, _)| i)
            .nth(char_position)
            .unwrap_or(self.text.len())
    }
}

/// Render an input as a line with a block cursor
pub fn input_to_line<'a>(input: &Input, theme: &crate::tui::theme::Theme) -> Line<'a> {
    let (left, right) = input.text.split_at(input.byte_index(input.cursor_position));
    let mut rest = right.chars();
    let cursor_char = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());

    Line::from(vec![
        Span::raw(left.to_string()),
        Span::styled(cursor_char, theme.input_cursor()),
        Span::raw(rest.as_str().to_string()),
    ])
}

/// Clamp `area` to at most `max_width` columns, anchored at its left edge
pub fn constrain_width(area: Rect, max_width: Option<u16>) -> Rect {
    match max_width {
        Some(width) => Rect {
            width: area.width.min(width),
            ..area
        },
        None => area,
    }
}
