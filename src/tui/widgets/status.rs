// ABOUTME: Status bar widget — theme, preset display name, message count, typing indicator.
// ABOUTME: Displayed at the bottom of the TUI as a single-line summary.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::session::{Preset, Theme};
use crate::tui::theme::Palette;

/// Inputs for the status bar line.
pub struct StatusBarParams {
    pub theme: Theme,
    pub preset: Preset,
    pub message_count: usize,
    pub pending_replies: usize,
}

/// Render the status bar: theme | preset | message count, plus a typing
/// indicator while scheduled replies are in flight.
pub fn status_line(params: &StatusBarParams, palette: &Palette) -> Line<'static> {
    let dim = Style::default().fg(palette.dim);
    let mut spans = vec![
        Span::styled(
            format!(" {} ", params.theme.storage_value()),
            Style::default().fg(palette.accent),
        ),
        Span::styled("| ", dim),
        Span::styled(
            format!("{} ", params.preset.display_name()),
            Style::default().fg(palette.text),
        ),
        Span::styled("| ", dim),
        Span::styled(
            format!("{} messages ", params.message_count),
            Style::default().fg(palette.text),
        ),
    ];

    if params.pending_replies > 0 {
        spans.push(Span::styled("| ", dim));
        spans.push(Span::styled(
            "EraAI is typing… ".to_string(),
            Style::default().fg(palette.accent),
        ));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> StatusBarParams {
        StatusBarParams {
            theme: Theme::Dark,
            preset: Preset::Glass,
            message_count: 4,
            pending_replies: 0,
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn status_shows_theme_preset_and_count() {
        let palette = Palette::for_theme(Theme::Dark);
        let text = line_text(&status_line(&params(), &palette));
        assert!(text.contains("dark"));
        assert!(text.contains("Glassmorphism"));
        assert!(text.contains("4 messages"));
        assert!(!text.contains("typing"));
    }

    #[test]
    fn status_shows_typing_indicator_while_replies_pending() {
        let palette = Palette::for_theme(Theme::Dark);
        let mut p = params();
        p.pending_replies = 2;
        let text = line_text(&status_line(&p, &palette));
        assert!(text.contains("typing"));
    }

    #[test]
    fn status_reflects_light_theme() {
        let palette = Palette::for_theme(Theme::Light);
        let mut p = params();
        p.theme = Theme::Light;
        p.preset = Preset::Minimal;
        let text = line_text(&status_line(&p, &palette));
        assert!(text.contains("light"));
        assert!(text.contains("Minimal"));
    }
}
