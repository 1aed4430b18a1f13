//! Shared text input buffer with cursor management.
//!
//! Used by the chat composer and the upload view's path prompt.

/// A single-line text input with a byte-indexed cursor.
///
/// The cursor always sits on a UTF-8 character boundary.
#[derive(Default)]
pub struct InputBuffer {
    content: String,
    cursor: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Editing ─────────────────────────────────────────────────────────

    pub fn insert_char(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert a whole string at the cursor (bracketed paste).
    pub fn insert_str(&mut self, s: &str) {
        self.content.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.content.remove(prev);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.next_boundary().is_some() {
            self.content.remove(self.cursor);
        }
    }

    // ── Cursor movement ─────────────────────────────────────────────────

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.content[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.content[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }

    // ── Content access ──────────────────────────────────────────────────

    /// Take the content out, resetting the buffer.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.content)
    }

    /// Replace the content, placing the cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        self.content = text.to_string();
        self.cursor = self.content.len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// True when the buffer holds nothing but whitespace.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Everything typed so far.
    pub fn text(&self) -> &str {
        &self.content
    }

    /// Byte offset of the cursor within `text()`.
    pub fn cursor_position(&self) -> usize {
        self.cursor
    }
}
