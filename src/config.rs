// ABOUTME: Configuration loading for erachat.
// ABOUTME: Reads ~/.erachat/config.toml with serde defaults; resolves data and store paths.

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reply: ReplyConfig,
    pub storage: StorageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reply: ReplyConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

/// Simulated-reply behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReplyConfig {
    /// Delay before a scheduled reply is appended, in milliseconds.
    pub delay_ms: u64,
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self { delay_ms: 650 }
    }
}

/// Where durable state lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Overrides the default data directory when set.
    pub data_dir: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: None }
    }
}

impl Config {
    /// Load config from ~/.erachat/config.toml, falling back to defaults
    /// when the file is absent.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Path to the config file.
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".erachat")
            .join("config.toml")
    }

    /// Root directory for durable state (store and transcripts).
    pub fn data_dir(&self) -> PathBuf {
        if let Some(ref dir) = self.storage.data_dir {
            return dir.clone();
        }
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("erachat")
    }

    /// Directory holding the key-value store files.
    pub fn store_dir(&self) -> PathBuf {
        self.data_dir().join("store")
    }

    /// Directory holding JSONL transcripts.
    pub fn transcripts_dir(&self) -> PathBuf {
        self.data_dir().join("transcripts")
    }
}
