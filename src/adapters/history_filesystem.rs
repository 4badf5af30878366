use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde_json::Value;

use crate::domain::history::{push_entry, remove_entry};
use crate::domain::{AppError, Artifact, HistoryEntry};
use crate::ports::HistoryStore;

/// History file name inside the prompt-architect home.
pub const HISTORY_FILE: &str = "history.json";

/// History persisted as a JSON array, newest entry first.
#[derive(Debug, Clone)]
pub struct FilesystemHistoryStore {
    path: PathBuf,
}

impl FilesystemHistoryStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at `<home>/history.json`.
    pub fn in_home(home: &std::path::Path) -> Self {
        Self::new(home.join(HISTORY_FILE))
    }

    /// Read the file. A missing file is empty. Entries that no longer parse are
    /// skipped but kept on disk; a file that is not a JSON array is moved aside.
    fn load(&self) -> Result<StoredHistory, AppError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(StoredHistory::default()),
            Err(err) => return Err(err.into()),
        };

        let values: Vec<Value> = match serde_json::from_str(&content) {
            Ok(values) => values,
            Err(err) => {
                let backup = self.path.with_extension("json.bak");
                tracing::warn!(
                    path = %self.path.display(),
                    backup = %backup.display(),
                    error = %err,
                    "moving malformed history file aside"
                );
                fs::rename(&self.path, &backup)?;
                return Ok(StoredHistory::default());
            }
        };

        let mut stored = StoredHistory::default();
        for value in values {
            match serde_json::from_value::<HistoryEntry>(value.clone()) {
                Ok(entry) => stored.entries.push(entry),
                Err(err) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %err,
                        "skipping unreadable history entry"
                    );
                    stored.unreadable.push(value);
                }
            }
        }
        Ok(stored)
    }

    fn persist(&self, stored: &StoredHistory) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut values = stored
            .entries
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<Value>, _>>()?;
        values.extend(stored.unreadable.iter().cloned());
        fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        Ok(())
    }
}

/// Parsed history plus the raw entries this version cannot read.
#[derive(Debug, Default)]
struct StoredHistory {
    entries: Vec<HistoryEntry>,
    unreadable: Vec<Value>,
}

impl HistoryStore for FilesystemHistoryStore {
    fn append(&self, artifact: Artifact) -> Result<HistoryEntry, AppError> {
        let mut stored = self.load()?;
        let entry = HistoryEntry::new(artifact);
        push_entry(&mut stored.entries, entry.clone());
        self.persist(&stored)?;
        tracing::debug!(id = %entry.id, kind = entry.artifact.kind(), "history entry recorded");
        Ok(entry)
    }

    fn list(&self) -> Result<Vec<HistoryEntry>, AppError> {
        Ok(self.load()?.entries)
    }

    fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut stored = self.load()?;
        let removed = remove_entry(&mut stored.entries, id);
        if removed {
            self.persist(&stored)?;
        }
        Ok(removed)
    }
}
