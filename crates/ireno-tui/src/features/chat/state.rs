//! Chat slice state: the owned transcript, turn controller, input line,
//! and scroll position.

use ireno_core::transcript::Transcript;
use ireno_core::turn::TurnController;

/// Upper bound for the manual scrollback offset. Render clamps to the
/// actual line count; this only stops the counter growing without bound.
const MAX_SCROLLBACK_LINES: u16 = 2000;

/// Chat feature state.
#[derive(Debug)]
pub struct ChatState {
    /// Session transcript, seeded with the welcome message.
    pub transcript: Transcript,
    /// Turn controller; its awaiting flag is the typing indicator.
    pub turn: TurnController,
    /// Message input line.
    pub input: InputState,
    /// Lines scrolled up from the bottom (0 = follow latest).
    pub scroll_offset: u16,
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            transcript: Transcript::new(),
            turn: TurnController::new(),
            input: InputState::new(),
            scroll_offset: 0,
        }
    }

    /// Snaps the view back to the latest message.
    pub fn follow_latest(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_offset = self
            .scroll_offset
            .saturating_add(lines)
            .min(MAX_SCROLLBACK_LINES);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-line message input with a character-based cursor.
#[derive(Debug, Default)]
pub struct InputState {
    buffer: String,
    /// Cursor position in chars.
    cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Cursor position in chars (for render-time cursor placement).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Byte offset of the cursor within the buffer.
    fn cursor_byte(&self) -> usize {
        self.buffer
            .char_indices()
            .nth(self.cursor)
            .map_or(self.buffer.len(), |(i, _)| i)
    }

    pub fn insert_char(&mut self, ch: char) {
        let at = self.cursor_byte();
        self.buffer.insert(at, ch);
        self.cursor += 1;
    }

    /// Deletes the char before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.cursor_byte();
        self.buffer.remove(at);
    }

    /// Deletes the char at the cursor.
    pub fn delete(&mut self) {
        let at = self.cursor_byte();
        if at < self.buffer.len() {
            self.buffer.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.chars().count();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Takes the buffer contents, leaving the input empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_take() {
        let mut input = InputState::new();
        for ch in "hello".chars() {
            input.insert_char(ch);
        }
        assert_eq!(input.text(), "hello");
        assert_eq!(input.take(), "hello");
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_cursor_editing_mid_string() {
        let mut input = InputState::new();
        for ch in "grid".chars() {
            input.insert_char(ch);
        }
        input.move_home();
        input.move_right();
        input.insert_char('x');
        assert_eq!(input.text(), "gxrid");

        input.backspace();
        assert_eq!(input.text(), "grid");

        input.delete();
        assert_eq!(input.text(), "gid");
    }

    #[test]
    fn test_multibyte_chars() {
        let mut input = InputState::new();
        input.insert_char('é');
        input.insert_char('2');
        input.move_left();
        input.move_left();
        input.delete();
        assert_eq!(input.text(), "2");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = InputState::new();
        input.insert_char('a');
        input.move_home();
        input.backspace();
        assert_eq!(input.text(), "a");
    }
}
