// ABOUTME: TUI module — ratatui full-screen interface for erachat.
// ABOUTME: Chat display, draft input handling, theme palettes, and the status bar.

pub mod input;
pub mod state;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use state::*;
