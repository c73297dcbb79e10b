// ABOUTME: Conversation session manager — owns history, theme, and preset, persisting on every mutation.
// ABOUTME: Restores state defensively at startup and prepares delayed mock replies for the event loop.

use crate::reply::generate_reply;
use crate::session::store::Store;
use crate::session::{greeting, HISTORY_KEY, Message, PRESET_KEY, Preset, THEME_KEY, Theme};

/// A reply whose text is already decided but whose delivery is delayed.
/// The event loop appends it via [`SessionManager::apply_reply`] once
/// the configured delay elapses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledReply {
    pub text: String,
}

/// Owns the conversation state and its persisted mirror.
///
/// Every mutation writes through to the store before returning, so a
/// restart at any point restores the last observable state. Malformed
/// stored values are treated as absence and replaced by defaults; no
/// storage content can make initialization fail.
pub struct SessionManager<S: Store> {
    store: S,
    history: Vec<Message>,
    theme: Theme,
    preset: Preset,
}

impl<S: Store> SessionManager<S> {
    /// Restore a session from the store, falling back to the default
    /// theme/preset and the canned greeting where values are absent or
    /// unparseable. The resolved theme is available to the caller
    /// before anything renders.
    pub fn initialize(store: S) -> Self {
        let theme = store
            .get(THEME_KEY)
            .and_then(|v| Theme::parse(&v))
            .unwrap_or_default();
        let preset = store
            .get(PRESET_KEY)
            .and_then(|v| Preset::parse(&v))
            .unwrap_or_default();

        let stored_history: Option<Vec<Message>> = store
            .get(HISTORY_KEY)
            .and_then(|v| serde_json::from_str(&v).ok());
        let substituted = stored_history.is_none();
        let history = stored_history.unwrap_or_else(greeting);

        let mut manager = Self {
            store,
            history,
            theme,
            preset,
        };
        // Write back the resolved theme (covers the fallback case) and,
        // when the greeting was substituted, the fresh history.
        manager.persist_theme();
        if substituted {
            manager.persist_history();
        }
        manager
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn preset(&self) -> Preset {
        self.preset
    }

    /// Replace the theme and persist it. Takes effect on the next frame.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.persist_theme();
    }

    /// Replace the preset and persist it. Rendering-only concern.
    pub fn set_preset(&mut self, preset: Preset) {
        self.preset = preset;
        self.persist_preset();
    }

    /// Append a user message and prepare its delayed reply.
    ///
    /// Blank or whitespace-only text is a no-op returning `None`. The
    /// reply text is computed now, from the current theme and preset;
    /// only its delivery is delayed. Each call yields one independent
    /// scheduled reply.
    pub fn submit_message(&mut self, text: &str) -> Option<ScheduledReply> {
        if text.trim().is_empty() {
            return None;
        }
        self.history.push(Message::user(text));
        self.persist_history();
        Some(ScheduledReply {
            text: generate_reply(text, self.theme, self.preset),
        })
    }

    /// Append a bot reply whose delay has elapsed.
    pub fn apply_reply(&mut self, reply: &ScheduledReply) {
        self.history.push(Message::bot(reply.text.clone()));
        self.persist_history();
    }

    /// Reset the conversation to the canned greeting (fresh ids) and
    /// persist immediately. Does not cancel replies already in flight;
    /// one landing after a clear is appended to the fresh history.
    pub fn clear_chat(&mut self) {
        self.history = greeting();
        self.persist_history();
    }

    fn persist_theme(&mut self) {
        if let Err(e) = self.store.set(THEME_KEY, self.theme.storage_value()) {
            eprintln!("Warning: failed to persist theme: {e}");
        }
    }

    fn persist_preset(&mut self) {
        if let Err(e) = self.store.set(PRESET_KEY, self.preset.storage_value()) {
            eprintln!("Warning: failed to persist preset: {e}");
        }
    }

    fn persist_history(&mut self) {
        match serde_json::to_string(&self.history) {
            Ok(json) => {
                if let Err(e) = self.store.set(HISTORY_KEY, &json) {
                    eprintln!("Warning: failed to persist history: {e}");
                }
            }
            Err(e) => eprintln!("Warning: failed to serialize history: {e}"),
        }
    }
}
