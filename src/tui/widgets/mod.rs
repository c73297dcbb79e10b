// ABOUTME: TUI widget sub-modules for the chat pane and status bar.
// ABOUTME: Each widget is a pure rendering function over session and TUI state.

pub mod chat;
pub mod status;
