// ABOUTME: Theme palettes — maps the light/dark preference to concrete terminal colors.
// ABOUTME: Resolved before the first frame so the restored theme is visible immediately.

use ratatui::style::Color;

use crate::session::Theme;

/// Concrete colors for one theme. Every widget draws through a palette;
/// nothing hardcodes a color, so switching themes retints the whole
/// frame on the next draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub user_prefix: Color,
    pub bot_prefix: Color,
    pub border: Color,
}

impl Palette {
    /// The palette for a theme preference.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color::Reset,
                text: Color::White,
                dim: Color::DarkGray,
                accent: Color::Indexed(104), // muted indigo, the original's accent
                user_prefix: Color::Green,
                bot_prefix: Color::Cyan,
                border: Color::DarkGray,
            },
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                dim: Color::Gray,
                accent: Color::Indexed(62),
                user_prefix: Color::Indexed(28),
                bot_prefix: Color::Indexed(30),
                border: Color::Gray,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_differ_between_themes() {
        let dark = Palette::for_theme(Theme::Dark);
        let light = Palette::for_theme(Theme::Light);
        assert_ne!(dark, light);
        assert_eq!(dark.text, Color::White);
        assert_eq!(light.text, Color::Black);
    }

    #[test]
    fn palette_is_stable_for_a_theme() {
        assert_eq!(
            Palette::for_theme(Theme::Dark),
            Palette::for_theme(Theme::Dark)
        );
    }
}
