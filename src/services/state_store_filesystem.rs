use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::warn;

use crate::config::Config;
use crate::domain::AppError;
use crate::ports::StateStore;

/// Filesystem-backed state store: one JSON blob file per key under a root
/// directory.
#[derive(Debug, Clone)]
pub struct FilesystemStateStore {
    root_path: PathBuf,
}

impl FilesystemStateStore {
    /// Create a store rooted at the configured storage path.
    pub fn new(config: &Config) -> Self {
        Self { root_path: config.storage_path.clone() }
    }

    /// Create a store using the default configuration.
    pub fn new_default() -> Result<Self, AppError> {
        let config = Config::new_default()?;
        Ok(Self::new(&config))
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.root_path.join(format!("{key}.json"))
    }
}

impl StateStore for FilesystemStateStore {
    fn load(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.blob_path(key)) {
            Ok(contents) => Some(contents),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                warn!(key, error = %err, "failed to read persisted state, using defaults");
                None
            }
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        fs::create_dir_all(&self.root_path)?;
        fs::write(self.blob_path(key), value)?;
        Ok(())
    }
}
