use std::cell::RefCell;

use crate::domain::template::{remove, upsert};
use crate::domain::{AppError, CustomTemplate, TemplateDraft};
use crate::ports::TemplateStore;

/// In-memory custom template store for testing.
#[derive(Default)]
#[allow(dead_code)]
pub struct MemoryTemplateStore {
    pub templates: RefCell<Vec<CustomTemplate>>,
}

#[allow(dead_code)]
impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn list(&self) -> Result<Vec<CustomTemplate>, AppError> {
        Ok(self.templates.borrow().clone())
    }

    fn save(&self, draft: TemplateDraft) -> Result<CustomTemplate, AppError> {
        upsert(&mut self.templates.borrow_mut(), draft)
    }

    fn delete(&self, id: &str) -> Result<bool, AppError> {
        Ok(remove(&mut self.templates.borrow_mut(), id))
    }
}
