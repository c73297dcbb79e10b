// ABOUTME: Main TUI rendering — assembles header, chat, input, and status bar each frame.
// ABOUTME: Draws everything through the active theme's palette and the preset's chat framing.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::session::{Message, Preset, Theme};
use crate::tui::state::TuiState;
use crate::tui::theme::Palette;
use crate::tui::widgets::chat::{chat_block, render_chat_lines};
use crate::tui::widgets::status::{StatusBarParams, status_line};

/// Read-only session state handed to the renderer each frame.
pub struct SessionView<'a> {
    pub history: &'a [Message],
    pub theme: Theme,
    pub preset: Preset,
}

/// Render the full screen layout to the given frame.
pub fn render(frame: &mut Frame, view: &SessionView, state: &mut TuiState) {
    let area = frame.area();
    let palette = Palette::for_theme(view.theme);

    // Paint the theme background under everything else.
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Chat area
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    // Header: title plus key hints.
    let header = Line::from(vec![
        Span::styled(
            " EraAI Chat ",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " Ctrl+T theme | Ctrl+P preset | Ctrl+L clear",
            Style::default().fg(palette.dim),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    // Chat area, framed per the active preset.
    let block = chat_block(view.preset, &palette);
    let chat_chunk = chunks[1];
    let inner = block.inner(chat_chunk);

    let chat_lines = render_chat_lines(view.history, &palette);
    let chat_paragraph = Paragraph::new(chat_lines).wrap(Wrap { trim: false });

    // Use ratatui's own line_count() so the wrapped height matches its
    // internal rendering exactly; a mismatch here hides the newest
    // messages behind the input area.
    let total_lines = chat_paragraph.line_count(inner.width) as u16;
    let max_scroll = total_lines.saturating_sub(inner.height);

    if state.scroll_offset > max_scroll {
        state.scroll_offset = max_scroll;
    }

    // scroll_offset counts lines up from the bottom (0 = at bottom).
    let scroll = max_scroll.saturating_sub(state.scroll_offset);
    frame.render_widget(chat_paragraph.scroll((scroll, 0)).block(block), chat_chunk);

    // Input area.
    let input_chunk = chunks[2];
    let mut input_block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border));
    if state.pending_replies > 0 {
        input_block = input_block.title(Span::styled(
            " EraAI is typing… ",
            Style::default().fg(palette.dim),
        ));
    }

    let input = if state.input.is_empty() {
        Paragraph::new(Span::styled(
            "Message EraAI…",
            Style::default().fg(palette.dim),
        ))
    } else {
        Paragraph::new(Span::styled(
            state.input.clone(),
            Style::default().fg(palette.text),
        ))
    };
    frame.render_widget(input.block(input_block), input_chunk);

    // Place the terminal cursor inside the draft.
    if input_chunk.width > 0 && input_chunk.height > 1 {
        state.clamp_cursor();
        let prefix = &state.input[..state.cursor_byte_index()];
        let visual_col = UnicodeWidthStr::width(prefix);
        let max_visual_col = input_chunk.width.saturating_sub(1) as usize;
        let cursor_x = input_chunk
            .x
            .saturating_add(visual_col.min(max_visual_col) as u16);
        // +1 skips the top border.
        let cursor_y = input_chunk.y.saturating_add(1);
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }

    // Status bar.
    let status = status_line(
        &StatusBarParams {
            theme: view.theme,
            preset: view.preset,
            message_count: view.history.len(),
            pending_replies: state.pending_replies,
        },
        &palette,
    );
    frame.render_widget(Paragraph::new(status), chunks[3]);
}
