pub mod builtin_templates;
pub mod gemini_http;
pub mod history_filesystem;
pub mod template_filesystem;

pub use builtin_templates::EmbeddedTemplateCatalog;
pub use gemini_http::HttpGeminiClient;
pub use history_filesystem::FilesystemHistoryStore;
pub use template_filesystem::FilesystemTemplateStore;
