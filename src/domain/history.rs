//! Bounded, deduplicated log of previously generated prompts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of retained history entries.
pub const HISTORY_CAP: usize = 50;

/// One previously generated prompt and when it was copied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The flattened prompt text.
    pub text: String,
    /// When the text was recorded (RFC 3339 in serialized form).
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of generated prompts, newest first, unique on text.
///
/// Inserting text that is already present moves it to the front with a fresh
/// timestamp instead of duplicating it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generated prompt at the front of the log.
    ///
    /// Blank text is ignored. A prior entry with identical text is removed
    /// before the new one is prepended, and the log is truncated to
    /// [`HISTORY_CAP`]. Returns `true` when the log changed, so callers know
    /// whether to persist.
    pub fn record(&mut self, text: &str, timestamp: DateTime<Utc>) -> bool {
        if text.trim().is_empty() {
            return false;
        }

        self.entries.retain(|entry| entry.text != text);
        self.entries.insert(0, HistoryEntry { text: text.to_string(), timestamp });
        self.entries.truncate(HISTORY_CAP);
        true
    }

    /// Entries newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Look up an entry by its exact text.
    pub fn find(&self, text: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.text == text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
