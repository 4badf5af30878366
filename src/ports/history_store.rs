use crate::domain::{AppError, Artifact, HistoryEntry};

/// Port for persisting generated-artifact history.
pub trait HistoryStore {
    /// Record an artifact; the new entry becomes the first in `list`.
    fn append(&self, artifact: Artifact) -> Result<HistoryEntry, AppError>;

    /// All entries, newest first.
    fn list(&self) -> Result<Vec<HistoryEntry>, AppError>;

    /// Remove an entry; `false` when no entry has that id.
    fn delete(&self, id: &str) -> Result<bool, AppError>;

    fn find(&self, id: &str) -> Result<Option<HistoryEntry>, AppError> {
        Ok(self.list()?.into_iter().find(|entry| entry.id == id))
    }
}
