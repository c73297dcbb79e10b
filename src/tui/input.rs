// ABOUTME: Keyboard input handling for the TUI — translates key events into user intents.
// ABOUTME: Theme toggle, preset cycle, clear, submit, quit, scrolling, and draft editing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::state::TuiState;

/// How many lines PageUp/PageDown scroll per press.
const PAGE_SCROLL_STEP: u16 = 10;

/// The result of processing a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum InputResult {
    /// No action needed.
    None,
    /// User submitted a message.
    Send(String),
    /// User toggled the color theme.
    ToggleTheme,
    /// User cycled to the next visual preset.
    CyclePreset,
    /// User cleared the conversation.
    ClearChat,
    /// User wants to quit.
    Quit,
}

/// Process a key event against the TUI state and return the intent.
pub fn handle_key(state: &mut TuiState, key: KeyEvent) -> InputResult {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return InputResult::Quit,
            KeyCode::Char('t') => return InputResult::ToggleTheme,
            KeyCode::Char('p') => return InputResult::CyclePreset,
            KeyCode::Char('l') => return InputResult::ClearChat,
            _ => return InputResult::None,
        }
    }

    match key.code {
        KeyCode::Esc => InputResult::Quit,
        KeyCode::Up => {
            state.scroll_offset = state.scroll_offset.saturating_add(1);
            InputResult::None
        }
        KeyCode::Down => {
            state.scroll_offset = state.scroll_offset.saturating_sub(1);
            InputResult::None
        }
        KeyCode::PageUp => {
            state.scroll_offset = state.scroll_offset.saturating_add(PAGE_SCROLL_STEP);
            InputResult::None
        }
        KeyCode::PageDown => {
            state.scroll_offset = state.scroll_offset.saturating_sub(PAGE_SCROLL_STEP);
            InputResult::None
        }
        KeyCode::Enter => {
            if let Some(text) = state.submit_input() {
                InputResult::Send(text)
            } else {
                InputResult::None
            }
        }
        KeyCode::Char(c) => {
            state.insert_char_at_cursor(c);
            InputResult::None
        }
        KeyCode::Backspace => {
            state.backspace_char();
            InputResult::None
        }
        KeyCode::Delete => {
            state.delete_char_at_cursor();
            InputResult::None
        }
        KeyCode::Left => {
            state.move_cursor_left();
            InputResult::None
        }
        KeyCode::Right => {
            state.move_cursor_right();
            InputResult::None
        }
        KeyCode::Home => {
            state.move_cursor_home();
            InputResult::None
        }
        KeyCode::End => {
            state.move_cursor_end();
            InputResult::None
        }
        _ => InputResult::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn ctrl_c_quits() {
        let mut state = TuiState::new();
        assert_eq!(handle_key(&mut state, ctrl('c')), InputResult::Quit);
    }

    #[test]
    fn esc_quits() {
        let mut state = TuiState::new();
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), InputResult::Quit);
    }

    #[test]
    fn ctrl_t_toggles_theme() {
        let mut state = TuiState::new();
        assert_eq!(handle_key(&mut state, ctrl('t')), InputResult::ToggleTheme);
    }

    #[test]
    fn ctrl_p_cycles_preset() {
        let mut state = TuiState::new();
        assert_eq!(handle_key(&mut state, ctrl('p')), InputResult::CyclePreset);
    }

    #[test]
    fn ctrl_l_clears_chat() {
        let mut state = TuiState::new();
        assert_eq!(handle_key(&mut state, ctrl('l')), InputResult::ClearChat);
    }

    #[test]
    fn ctrl_modifier_does_not_insert_text() {
        let mut state = TuiState::new();
        assert_eq!(handle_key(&mut state, ctrl('x')), InputResult::None);
        assert_eq!(state.input, "");
    }

    #[test]
    fn typing_builds_the_draft() {
        let mut state = TuiState::new();
        for c in "hi!".chars() {
            assert_eq!(handle_key(&mut state, key(KeyCode::Char(c))), InputResult::None);
        }
        assert_eq!(state.input, "hi!");
    }

    #[test]
    fn enter_submits_non_blank_draft() {
        let mut state = TuiState::new();
        state.input = "hello".to_string();
        state.cursor_pos = 5;
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Enter)),
            InputResult::Send("hello".to_string())
        );
        assert_eq!(state.input, "");
    }

    #[test]
    fn enter_on_blank_draft_is_a_no_op() {
        let mut state = TuiState::new();
        state.input = "   ".to_string();
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), InputResult::None);
    }

    #[test]
    fn arrow_keys_scroll_the_chat() {
        let mut state = TuiState::new();
        handle_key(&mut state, key(KeyCode::Up));
        handle_key(&mut state, key(KeyCode::Up));
        assert_eq!(state.scroll_offset, 2);
        handle_key(&mut state, key(KeyCode::Down));
        assert_eq!(state.scroll_offset, 1);
    }

    #[test]
    fn page_keys_scroll_in_steps() {
        let mut state = TuiState::new();
        handle_key(&mut state, key(KeyCode::PageUp));
        assert_eq!(state.scroll_offset, PAGE_SCROLL_STEP);
        handle_key(&mut state, key(KeyCode::PageDown));
        assert_eq!(state.scroll_offset, 0);
        // Scrolling below the bottom saturates at zero.
        handle_key(&mut state, key(KeyCode::PageDown));
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn backspace_edits_the_draft() {
        let mut state = TuiState::new();
        state.input = "abc".to_string();
        state.cursor_pos = 3;
        handle_key(&mut state, key(KeyCode::Backspace));
        assert_eq!(state.input, "ab");
    }
}
