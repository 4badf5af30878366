mod fake_generation_client;
mod memory_history_store;
mod memory_template_store;

pub use fake_generation_client::FakeGenerationClient;
pub use memory_history_store::MemoryHistoryStore;
pub use memory_template_store::MemoryTemplateStore;

use crate::adapters::EmbeddedTemplateCatalog;
use crate::app::AppContext;

pub type MemoryContext =
    AppContext<MemoryHistoryStore, MemoryTemplateStore, EmbeddedTemplateCatalog>;

/// Context backed by in-memory stores and the embedded template catalog.
pub fn memory_context() -> MemoryContext {
    AppContext::new(
        MemoryHistoryStore::new(),
        MemoryTemplateStore::new(),
        EmbeddedTemplateCatalog::new(),
    )
}
