use std::cell::RefCell;

use crate::domain::history::{push_entry, remove_entry};
use crate::domain::{AppError, Artifact, HistoryEntry};
use crate::ports::HistoryStore;

/// In-memory history store for testing.
#[derive(Default)]
#[allow(dead_code)]
pub struct MemoryHistoryStore {
    pub entries: RefCell<Vec<HistoryEntry>>,
}

#[allow(dead_code)]
impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn append(&self, artifact: Artifact) -> Result<HistoryEntry, AppError> {
        let entry = HistoryEntry::new(artifact);
        push_entry(&mut self.entries.borrow_mut(), entry.clone());
        Ok(entry)
    }

    fn list(&self) -> Result<Vec<HistoryEntry>, AppError> {
        Ok(self.entries.borrow().clone())
    }

    fn delete(&self, id: &str) -> Result<bool, AppError> {
        Ok(remove_entry(&mut self.entries.borrow_mut(), id))
    }
}
