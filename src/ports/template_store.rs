use crate::domain::{AppError, BuiltinTemplate, CustomTemplate, TemplateDraft};

/// Port for user-defined templates.
pub trait TemplateStore {
    /// All custom templates, most recently created first.
    fn list(&self) -> Result<Vec<CustomTemplate>, AppError>;

    /// Create or update a template.
    fn save(&self, draft: TemplateDraft) -> Result<CustomTemplate, AppError>;

    /// Remove a template; `false` when no template has that id.
    fn delete(&self, id: &str) -> Result<bool, AppError>;
}

/// Port for the read-only built-in template catalog.
pub trait BuiltinTemplateCatalog {
    fn templates(&self) -> Result<Vec<BuiltinTemplate>, AppError>;

    fn template(&self, id: &str) -> Result<Option<BuiltinTemplate>, AppError> {
        Ok(self.templates()?.into_iter().find(|template| template.id == id))
    }
}
