use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::domain::template::{remove, upsert};
use crate::domain::{AppError, CustomTemplate, TemplateDraft};
use crate::ports::TemplateStore;

/// Custom template file name inside the prompt-architect home.
pub const TEMPLATES_FILE: &str = "templates.yml";

/// Custom templates persisted as a YAML sequence.
#[derive(Debug, Clone)]
pub struct FilesystemTemplateStore {
    path: PathBuf,
}

impl FilesystemTemplateStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn in_home(home: &Path) -> Self {
        Self::new(home.join(TEMPLATES_FILE))
    }

    /// Templates that no longer parse are skipped but kept on disk; a file
    /// that is not a YAML sequence is moved aside.
    fn load(&self) -> Result<StoredTemplates, AppError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(StoredTemplates::default()),
            Err(err) => return Err(err.into()),
        };

        if content.trim().is_empty() {
            return Ok(StoredTemplates::default());
        }

        let values: Vec<Value> = match serde_yaml::from_str(&content) {
            Ok(values) => values,
            Err(err) => {
                let backup = self.path.with_extension("yml.bak");
                tracing::warn!(
                    path = %self.path.display(),
                    backup = %backup.display(),
                    error = %err,
                    "moving malformed templates file aside"
                );
                fs::rename(&self.path, &backup)?;
                return Ok(StoredTemplates::default());
            }
        };

        let mut stored = StoredTemplates::default();
        for value in values {
            match serde_yaml::from_value::<CustomTemplate>(value.clone()) {
                Ok(template) => stored.templates.push(template),
                Err(err) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %err,
                        "skipping unreadable template"
                    );
                    stored.unreadable.push(value);
                }
            }
        }
        Ok(stored)
    }

    fn persist(&self, stored: &StoredTemplates) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut values = stored
            .templates
            .iter()
            .map(serde_yaml::to_value)
            .collect::<Result<Vec<Value>, _>>()?;
        values.extend(stored.unreadable.iter().cloned());
        fs::write(&self.path, serde_yaml::to_string(&values)?)?;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct StoredTemplates {
    templates: Vec<CustomTemplate>,
    unreadable: Vec<Value>,
}

impl TemplateStore for FilesystemTemplateStore {
    fn list(&self) -> Result<Vec<CustomTemplate>, AppError> {
        Ok(self.load()?.templates)
    }

    fn save(&self, draft: TemplateDraft) -> Result<CustomTemplate, AppError> {
        let mut stored = self.load()?;
        let saved = upsert(&mut stored.templates, draft)?;
        self.persist(&stored)?;
        Ok(saved)
    }

    fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut stored = self.load()?;
        let removed = remove(&mut stored.templates, id);
        if removed {
            self.persist(&stored)?;
        }
        Ok(removed)
    }
}
