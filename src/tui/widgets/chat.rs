// ABOUTME: Chat widget — renders the message history into styled ratatui Lines.
// ABOUTME: Sender prefixes come from the palette; the preset picks the chat framing.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding};

use crate::session::{Message, Preset, Sender};
use crate::tui::theme::Palette;

/// Render the history into styled lines for display.
pub fn render_chat_lines(messages: &[Message], palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (idx, msg) in messages.iter().enumerate() {
        // Blank separator line between messages.
        if idx > 0 {
            lines.push(Line::from(""));
        }

        match msg.from {
            Sender::User => {
                lines.push(Line::from(vec![
                    Span::styled(
                        "❯ ",
                        Style::default()
                            .fg(palette.user_prefix)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(msg.text.clone(), Style::default().fg(palette.text)),
                ]));
            }
            Sender::Bot => {
                // First line gets the prefix, subsequent lines are plain.
                for (i, text) in msg.text.split('\n').enumerate() {
                    if i == 0 {
                        lines.push(Line::from(vec![
                            Span::styled(
                                "⏺ ",
                                Style::default()
                                    .fg(palette.bot_prefix)
                                    .add_modifier(Modifier::BOLD),
                            ),
                            Span::styled(text.to_string(), Style::default().fg(palette.text)),
                        ]));
                    } else {
                        lines.push(Line::from(Span::styled(
                            text.to_string(),
                            Style::default().fg(palette.text),
                        )));
                    }
                }
            }
        }
    }

    lines
}

/// The chat container block for a preset. Presets change framing only:
/// minimal is borderless, glass draws a rounded frame, mobile narrows
/// the column like a phone screen.
pub fn chat_block(preset: Preset, palette: &Palette) -> Block<'static> {
    let base = Block::default().padding(Padding::horizontal(1));
    match preset {
        Preset::Minimal => base,
        Preset::Glass => base
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border)),
        Preset::Mobile => base.padding(Padding::horizontal(8)),
    }
}
