// ABOUTME: Mock reply generator — deterministic canned responses keyed off the user's text.
// ABOUTME: Pure function over (text, theme, preset); first matching keyword rule wins.

use crate::session::{Preset, Theme};

/// Produce the simulated assistant reply for a submitted message.
///
/// Keyword matching is case-insensitive and checked in priority order;
/// exactly one branch fires. The fallback echoes the original
/// (non-lowercased) text. Total over all inputs, no side effects.
pub fn generate_reply(text: &str, theme: Theme, preset: Preset) -> String {
    let lowered = text.to_lowercase();
    if lowered.contains("theme") {
        format!("You're currently using {} mode.", theme.storage_value())
    } else if lowered.contains("style") || lowered.contains("preset") {
        format!("Preset active: {}.", preset.display_name())
    } else {
        format!("\"{text}\" — got it! How can I help further?")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_question_reveals_current_theme() {
        let reply = generate_reply("What theme are you using?", Theme::Dark, Preset::Minimal);
        assert!(reply.contains("dark"), "got: {reply}");

        let reply = generate_reply("THEME please", Theme::Light, Preset::Glass);
        assert!(reply.contains("light"), "matching is case-insensitive");
    }

    #[test]
    fn preset_question_reveals_display_name() {
        let reply = generate_reply("nice preset!", Theme::Dark, Preset::Glass);
        assert!(reply.contains("Glassmorphism"), "got: {reply}");

        let reply = generate_reply("love this style", Theme::Light, Preset::Mobile);
        assert!(reply.contains("Mobile"), "got: {reply}");
    }

    #[test]
    fn theme_rule_wins_over_preset_rule() {
        // "theme" and "preset" both present: first rule fires, no accumulation.
        let reply = generate_reply("theme or preset?", Theme::Dark, Preset::Glass);
        assert!(reply.contains("dark"));
        assert!(!reply.contains("Glassmorphism"));
    }

    #[test]
    fn fallback_echoes_original_text() {
        let reply = generate_reply("hello there", Theme::Dark, Preset::Minimal);
        assert!(reply.contains("hello there"), "got: {reply}");
    }

    #[test]
    fn fallback_preserves_original_casing() {
        let reply = generate_reply("Hello There", Theme::Dark, Preset::Minimal);
        assert!(reply.contains("Hello There"));
    }

    #[test]
    fn total_over_odd_inputs() {
        // No panics, always a non-empty reply.
        for text in ["", "   ", "🙂🙂🙂", "\"quoted\"", "a\nb"] {
            let reply = generate_reply(text, Theme::Light, Preset::Mobile);
            assert!(!reply.is_empty());
        }
    }
}
