//! prompt-architect: assemble cinematic prompts for generative image and video
//! models, and drive Gemini-hosted enhancement and generation.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    BuildOptions, BuildOutcome, FillOutcome, ImageOutcome, OptimizeOutcome, ParameterOptions,
    ResolvedTemplate, ReuseOutcome, TemplateListing, VideoOutcome, aspect_ratios, build, enhance,
    history_delete, history_list, history_reuse, image, load_config, load_images, optimize, options,
    suggest, template_delete, template_fill, template_list, template_save, template_show, video,
};
pub use domain::{
    AppConfig, AppError, Artifact, CinematicOption, CustomTemplate, HistoryEntry, ImageModel,
    OptimizeStyle, OptimizerOutput, OutputFormat, Parameter, PromptPatch, PromptState,
    ReferenceImage, TargetAi, TemplateDraft, build_prompt,
};
