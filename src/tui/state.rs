// ABOUTME: TUI state — the draft input buffer with UTF-8 cursor editing, plus scroll state.
// ABOUTME: Holds presentation-only state; conversation state lives in the session manager.

/// Presentation state: the draft input, cursor, scroll position, and
/// the number of replies still waiting on their delay.
pub struct TuiState {
    pub input: String,
    pub cursor_pos: usize,
    /// Lines scrolled up from the bottom (0 = pinned to newest).
    pub scroll_offset: u16,
    pub pending_replies: usize,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            cursor_pos: 0,
            scroll_offset: 0,
            pending_replies: 0,
        }
    }

    /// Reset scroll to the bottom, e.g. after a new message arrives.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }

    /// Submit the draft. Trimming applies only to the blank check; the
    /// text is handed over verbatim, surrounding whitespace included.
    /// Blank drafts are left untouched and yield `None`.
    pub fn submit_input(&mut self) -> Option<String> {
        if self.input.trim().is_empty() {
            return None;
        }
        self.cursor_pos = 0;
        Some(std::mem::take(&mut self.input))
    }

    /// Clamp the cursor to the valid character range of the draft.
    pub fn clamp_cursor(&mut self) {
        self.cursor_pos = self.cursor_pos.min(self.input_char_len());
    }

    /// Current cursor position as a byte index into the UTF-8 draft.
    pub fn cursor_byte_index(&self) -> usize {
        char_index_to_byte_index(&self.input, self.cursor_pos)
    }

    /// Number of characters in the draft.
    pub fn input_char_len(&self) -> usize {
        self.input.chars().count()
    }

    /// Insert a character at the cursor and advance past it.
    pub fn insert_char_at_cursor(&mut self, c: char) {
        self.clamp_cursor();
        let byte_index = self.cursor_byte_index();
        self.input.insert(byte_index, c);
        self.cursor_pos += 1;
    }

    /// Delete the character before the cursor (backspace).
    pub fn backspace_char(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos == 0 {
            return;
        }
        let end = self.cursor_byte_index();
        let start = char_index_to_byte_index(&self.input, self.cursor_pos - 1);
        self.input.replace_range(start..end, "");
        self.cursor_pos -= 1;
    }

    /// Delete the character at the cursor (delete).
    pub fn delete_char_at_cursor(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos >= self.input_char_len() {
            return;
        }
        let start = self.cursor_byte_index();
        let end = char_index_to_byte_index(&self.input, self.cursor_pos + 1);
        self.input.replace_range(start..end, "");
    }

    pub fn move_cursor_left(&mut self) {
        self.clamp_cursor();
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos < self.input_char_len() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.input_char_len();
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

fn char_index_to_byte_index(s: &str, char_index: usize) -> usize {
    if char_index == 0 {
        return 0;
    }
    match s.char_indices().nth(char_index) {
        Some((idx, _)) => idx,
        None => s.len(),
    }
}
