//! History persisted as a JSON array in a single file.
//!
//! Every operation reads the file, applies the change and writes it back.
//! A missing file is an empty history; an unreadable or corrupt one is logged
//! and treated as empty.

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::HistoryError;
use crate::store::{insert_capped, HistoryStore};
use crate::types::{EntryId, HistoryConfig, HistoryItem, MathProblem};

#[derive(Debug, Clone)]
pub struct JsonFileHistory {
    path: PathBuf,
    config: HistoryConfig,
}

impl JsonFileHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_config(path, HistoryConfig::default())
    }

    pub fn with_config(path: impl Into<PathBuf>, config: HistoryConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> VecDeque<HistoryItem> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return VecDeque::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "cannot read history");
                return VecDeque::new();
            }
        };

        match serde_json::from_str::<VecDeque<HistoryItem>>(&content) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "corrupt history file");
                VecDeque::new()
            }
        }
    }

    fn store(&self, items: &VecDeque<HistoryItem>) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl HistoryStore for JsonFileHistory {
    fn save(&mut self, problem: MathProblem, result: Option<String>) -> Result<(), HistoryError> {
        let mut items = self.load();
        insert_capped(&mut items, HistoryItem { problem, result }, self.config.capacity);
        self.store(&items)
    }

    fn list(&self) -> Vec<HistoryItem> {
        self.load().into_iter().collect()
    }

    fn clear(&mut self) -> Result<(), HistoryError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn remove(&mut self, id: EntryId) -> Result<bool, HistoryError> {
        let mut items = self.load();
        let before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == before {
            return Ok(false);
        }
        self.store(&items)?;
        Ok(true)
    }

    /// One past the largest stored id.
    fn next_id(&self) -> EntryId {
        self.load().iter().map(HistoryItem::id).max().map_or(1, |id| id + 1)
    }
}
