//! Shared test doubles for the promptpad public API.

use std::collections::HashMap;

use promptpad::{AppError, ClipboardWriter, StateStore};

/// Clipboard double that captures writes and can be told to fail.
#[derive(Default)]
#[allow(dead_code)]
pub struct RecordingClipboard {
    written: Vec<String>,
    should_fail: bool,
}

#[allow(dead_code)]
impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { written: Vec::new(), should_fail: true }
    }

    pub fn last_written(&self) -> Option<&str> {
        self.written.last().map(String::as_str)
    }

    pub fn write_count(&self) -> usize {
        self.written.len()
    }
}

impl ClipboardWriter for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        if self.should_fail {
            return Err(AppError::Clipboard("recording clipboard set to fail".to_string()));
        }
        self.written.push(text.to_string());
        Ok(())
    }
}

/// In-memory state store double.
#[derive(Default)]
#[allow(dead_code)]
pub struct InMemoryStore {
    blobs: HashMap<String, String>,
}

#[allow(dead_code)]
impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&mut self, key: &str, blob: &str) {
        self.blobs.insert(key.to_string(), blob.to_string());
    }
}

impl StateStore for InMemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.blobs.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
