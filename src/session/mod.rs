// ABOUTME: Session data model — chat messages, sender roles, theme and preset preferences.
// ABOUTME: Defines the persisted wire format, storage keys, and the weak-uniqueness id scheme.

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub mod log;
pub mod manager;
pub mod store;

pub use log::TranscriptLogger;
pub use manager::SessionManager;
pub use store::{FileStore, MemStore, Store};

/// Storage key for the persisted theme preference.
pub const THEME_KEY: &str = "eraai_theme";
/// Storage key for the persisted preset preference.
pub const PRESET_KEY: &str = "eraai_preset";
/// Storage key for the persisted message history.
pub const HISTORY_KEY: &str = "eraai_messages";

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single chat message. Immutable after creation; the id is unique
/// within a session (weak uniqueness, see [`uid`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub from: Sender,
    pub text: String,
}

impl Message {
    /// Create a user message with a fresh id.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: uid(),
            from: Sender::User,
            text: text.into(),
        }
    }

    /// Create a bot message with a fresh id.
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            id: uid(),
            from: Sender::Bot,
            text: text.into(),
        }
    }
}

/// Color theme preference. Stored as `"light"` / `"dark"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The string written to the store for this theme.
    pub fn storage_value(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything unrecognized is `None`; callers
    /// treat that as absence and fall back to the default.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The other theme (light <-> dark).
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Visual layout preset. Affects rendering only, never logic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Preset {
    #[default]
    Minimal,
    Glass,
    Mobile,
}

impl Preset {
    /// The string written to the store for this preset.
    pub fn storage_value(self) -> &'static str {
        match self {
            Preset::Minimal => "minimal",
            Preset::Glass => "glass",
            Preset::Mobile => "mobile",
        }
    }

    /// Parse a stored value; unrecognized values are treated as absence.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "minimal" => Some(Preset::Minimal),
            "glass" => Some(Preset::Glass),
            "mobile" => Some(Preset::Mobile),
            _ => None,
        }
    }

    /// Human-facing name, as shown in replies and the status bar.
    pub fn display_name(self) -> &'static str {
        match self {
            Preset::Minimal => "Minimal",
            Preset::Glass => "Glassmorphism",
            Preset::Mobile => "Mobile",
        }
    }

    /// The next preset in cycle order (minimal -> glass -> mobile -> minimal).
    pub fn cycled(self) -> Self {
        match self {
            Preset::Minimal => Preset::Glass,
            Preset::Glass => Preset::Mobile,
            Preset::Mobile => Preset::Minimal,
        }
    }
}

/// The fixed two-message greeting used as initial and post-clear history.
/// Each call mints fresh ids.
pub fn greeting() -> Vec<Message> {
    vec![
        Message::bot("👋 Hi! I'm EraAI — your personal intelligent assistant."),
        Message::bot("Ask me anything… or try switching UI presets!"),
    ]
}

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a message id: base36 millisecond timestamp plus a 4-char
/// random base36 suffix. Not cryptographically unique; collisions are
/// cosmetic (duplicate list keys), so weak uniqueness is acceptable.
pub fn uid() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let mut id = base36(millis);
    let mut rng = rand::rng();
    for _ in 0..4 {
        id.push(BASE36[rng.random_range(0..36)] as char);
    }
    id
}

fn base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}
