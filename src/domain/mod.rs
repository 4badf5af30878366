pub mod catalog;
pub mod config;
pub mod description;
pub mod error;
pub mod history;
pub mod instructions;
pub mod media;
pub mod optimizer;
pub mod output_format;
pub mod parameter;
pub mod prompt_builder;
pub mod prompt_state;
pub mod reference_image;
pub mod sanitize;
pub mod template;

pub use catalog::CinematicOption;
pub use config::{AppConfig, GeminiApiConfig, OutputConfig};
pub use error::AppError;
pub use history::{Artifact, HISTORY_LIMIT, HistoryEntry, ImageSettings};
pub use media::ImageModel;
pub use optimizer::{OptimizeStyle, OptimizerOutput, TargetAi};
pub use output_format::OutputFormat;
pub use parameter::Parameter;
pub use prompt_builder::build_prompt;
pub use prompt_state::{PromptPatch, PromptState};
pub use reference_image::ReferenceImage;
pub use sanitize::{sanitize, wrap_user_prompt};
pub use template::{BuiltinTemplate, CustomTemplate, TemplateDraft, TemplateKind, TemplateMode};
