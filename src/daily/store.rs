// src/daily/store.rs
// Day-keyed persistence for the prompt rotation. The store holds at most one
// set at a time; expiry is decided by the reader comparing date keys.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;

use super::DailyPromptSet;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("prompt store io: {0}")]
    Io(#[from] std::io::Error),
    #[error("prompt store decode: {0}")]
    Decode(#[from] serde_json::Error),
}

pub trait PromptStore: Send + Sync {
    fn load(&self) -> Result<Option<DailyPromptSet>, StoreError>;
    fn save(&self, set: &DailyPromptSet) -> Result<(), StoreError>;
}

/// JSON file in the platform data directory.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/emberlog/daily_prompts.json`, when the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|dir| dir.join("emberlog").join("daily_prompts.json"))
    }
}

impl PromptStore for JsonFileStore {
    fn load(&self) -> Result<Option<DailyPromptSet>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let set = serde_json::from_str(&raw)?;
        Ok(Some(set))
    }

    fn save(&self, set: &DailyPromptSet) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(set)?)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Option<DailyPromptSet>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PromptStore for MemoryStore {
    fn load(&self) -> Result<Option<DailyPromptSet>, StoreError> {
        Ok(self.inner.lock().unwrap().clone())
    }

    fn save(&self, set: &DailyPromptSet) -> Result<(), StoreError> {
        *self.inner.lock().unwrap() = Some(set.clone());
        Ok(())
    }
}
