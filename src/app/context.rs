use crate::ports::{BuiltinTemplateCatalog, HistoryStore, TemplateStore};

/// Application context holding the stores commands operate on.
pub struct AppContext<H: HistoryStore, T: TemplateStore, B: BuiltinTemplateCatalog> {
    history: H,
    templates: T,
    builtins: B,
}

impl<H: HistoryStore, T: TemplateStore, B: BuiltinTemplateCatalog> AppContext<H, T, B> {
    /// Create a new application context.
    pub fn new(history: H, templates: T, builtins: B) -> Self {
        Self { history, templates, builtins }
    }

    /// Get a reference to the history store.
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Get a reference to the custom template store.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    /// Get a reference to the built-in template catalog.
    pub fn builtins(&self) -> &B {
        &self.builtins
    }
}
