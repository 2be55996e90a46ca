//! Grow-only log of the session's accepted steps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded step of the story.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChronicleEntry {
    /// Label of the beat the step belonged to.
    pub beat: String,
    /// What happened, in one line.
    pub text: String,
    /// When the step was recorded.
    pub timestamp: DateTime<Utc>,
}

/// A chronological log of session steps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Chronicle {
    entries: Vec<ChronicleEntry>,
}

impl Chronicle {
    /// Create an empty chronicle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a step at the current time.
    pub fn record(&mut self, beat: impl Into<String>, text: impl Into<String>) {
        self.entries.push(ChronicleEntry {
            beat: beat.into(),
            text: text.into(),
            timestamp: Utc::now(),
        });
    }

    /// All entries in order.
    pub fn entries(&self) -> &[ChronicleEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the chronicle is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the chronicle as markdown, timestamps included.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Session Chronicle\n\n");
        for entry in &self.entries {
            out.push_str(&format!(
                "- **{}** ({}): {}\n",
                entry.beat,
                entry.timestamp.format("%H:%M:%S"),
                entry.text
            ));
        }
        out
    }

    /// Export the chronicle as pretty-printed JSON.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }
}
