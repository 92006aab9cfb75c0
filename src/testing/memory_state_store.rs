use std::collections::HashMap;

use crate::domain::AppError;
use crate::ports::StateStore;

/// In-memory state store for testing.
#[derive(Default)]
pub struct MemoryStateStore {
    blobs: HashMap<String, String>,
    /// When set, every `save` fails.
    pub fail_saves: bool,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a blob, e.g. corrupt data for hydration tests.
    pub fn seed(&mut self, key: &str, blob: &str) {
        self.blobs.insert(key.to_string(), blob.to_string());
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self, key: &str) -> Option<String> {
        self.blobs.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        if self.fail_saves {
            return Err(AppError::config_error("memory store saves disabled"));
        }
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
