// ABOUTME: JSONL transcript logger — appends each chat message to a per-run log file.
// ABOUTME: Stores transcripts under <data_dir>/transcripts/, one timestamped file per session.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::session::Message;

/// A single JSONL line: when the message was appended, and the message.
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub timestamp: String,
    pub message: Message,
}

/// Appends chat messages as JSONL lines to a per-run transcript file.
/// Purely observational; the durable store, not the transcript, is the
/// source of truth for restore.
pub struct TranscriptLogger {
    writer: BufWriter<File>,
    pub transcript_dir: PathBuf,
}

impl TranscriptLogger {
    /// Create a logger writing into `transcript_dir`, creating the
    /// directory and a new file named with the current timestamp.
    pub fn new_in_dir(transcript_dir: &Path) -> anyhow::Result<Self> {
        fs::create_dir_all(transcript_dir)?;
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let log_path = transcript_dir.join(format!("{}.jsonl", timestamp));
        let file = File::create(&log_path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            transcript_dir: transcript_dir.to_path_buf(),
        })
    }

    /// Append one message to the transcript.
    pub fn log_message(&mut self, msg: &Message) -> anyhow::Result<()> {
        let entry = TranscriptEntry {
            timestamp: Utc::now().to_rfc3339(),
            message: msg.clone(),
        };
        let line = serde_json::to_string(&entry)?;
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }
}
