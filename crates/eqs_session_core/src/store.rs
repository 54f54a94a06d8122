//! History store interface and the in-memory implementation.

use std::collections::VecDeque;

use crate::error::HistoryError;
use crate::types::{EntryId, HistoryConfig, HistoryItem, MathProblem};

/// Collaborator interface for the recent-problem log.
///
/// Items are listed newest first. A store is mutated through `&mut self`, so
/// one owner serializes its read-modify-write cycles.
pub trait HistoryStore {
    /// Insert a problem (and its result) at the front, evicting the oldest
    /// items beyond capacity.
    fn save(&mut self, problem: MathProblem, result: Option<String>) -> Result<(), HistoryError>;

    /// All items, newest first.
    fn list(&self) -> Vec<HistoryItem>;

    fn clear(&mut self) -> Result<(), HistoryError>;

    /// Remove one item; returns whether it existed.
    fn remove(&mut self, id: EntryId) -> Result<bool, HistoryError>;

    /// Id to hand to the next saved problem.
    fn next_id(&self) -> EntryId;
}

/// Insert `item` at the front of a newest-first list and truncate to `capacity`.
pub(crate) fn insert_capped(items: &mut VecDeque<HistoryItem>, item: HistoryItem, capacity: usize) {
    items.push_front(item);
    items.truncate(capacity);
}

/// Process-local history. Ids are auto-incrementing and never reused.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    next_id: EntryId,
    items: VecDeque<HistoryItem>,
    config: HistoryConfig,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::with_config(HistoryConfig::default())
    }

    pub fn with_config(config: HistoryConfig) -> Self {
        Self {
            next_id: 1,
            items: VecDeque::new(),
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }
}

impl HistoryStore for MemoryHistory {
    fn save(&mut self, problem: MathProblem, result: Option<String>) -> Result<(), HistoryError> {
        if problem.id >= self.next_id {
            self.next_id = problem.id + 1;
        }
        insert_capped(
            &mut self.items,
            HistoryItem { problem, result },
            self.config.capacity,
        );
        Ok(())
    }

    fn list(&self) -> Vec<HistoryItem> {
        self.items.iter().cloned().collect()
    }

    fn clear(&mut self) -> Result<(), HistoryError> {
        self.items.clear();
        Ok(())
    }

    fn remove(&mut self, id: EntryId) -> Result<bool, HistoryError> {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        Ok(self.items.len() != before)
    }

    fn next_id(&self) -> EntryId {
        self.next_id
    }
}
