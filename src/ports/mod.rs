mod generation_client;
mod history_store;
mod template_store;

pub use generation_client::{GenerationClient, VideoOperation};
pub use history_store::HistoryStore;
pub use template_store::{BuiltinTemplateCatalog, TemplateStore};
