//! API Facade for the application.
//!
//! Each function resolves the home directory, builds the filesystem-backed
//! context (and the Gemini client where needed) and runs one command.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::adapters::{
    EmbeddedTemplateCatalog, FilesystemHistoryStore, FilesystemTemplateStore, HttpGeminiClient,
};
use crate::app::commands;
use crate::app::{AppContext, config};

pub use crate::app::commands::build::{BuildOptions, BuildOutcome};
pub use crate::app::commands::history::ReuseOutcome;
pub use crate::app::commands::image::ImageOutcome;
pub use crate::app::commands::optimize::OptimizeOutcome;
pub use crate::app::commands::options::ParameterOptions;
pub use crate::app::commands::template::{FillOutcome, ResolvedTemplate, TemplateListing};
pub use crate::app::commands::video::VideoOutcome;
pub use crate::domain::{
    AppConfig, AppError, CinematicOption, CustomTemplate, HistoryEntry, ImageModel, OptimizeStyle,
    OutputFormat, Parameter, PromptPatch, PromptState, ReferenceImage, TargetAi, TemplateDraft,
};

type FilesystemContext =
    AppContext<FilesystemHistoryStore, FilesystemTemplateStore, EmbeddedTemplateCatalog>;

/// Create an `AppContext` rooted at `home`.
fn create_context(home: &Path) -> FilesystemContext {
    AppContext::new(
        FilesystemHistoryStore::in_home(home),
        FilesystemTemplateStore::in_home(home),
        EmbeddedTemplateCatalog::new(),
    )
}

fn current_context() -> Result<FilesystemContext, AppError> {
    Ok(create_context(&config::home_dir()?))
}

fn create_client(config: &AppConfig) -> Result<HttpGeminiClient, AppError> {
    HttpGeminiClient::from_env_with_config(&config.gemini)
}

/// Load configuration from the home directory.
pub fn load_config() -> Result<AppConfig, AppError> {
    config::load_config(&config::home_dir()?)
}

/// Read reference image files.
pub fn load_images(paths: &[PathBuf]) -> Result<Vec<ReferenceImage>, AppError> {
    paths.iter().map(|path| ReferenceImage::load(path)).collect()
}

/// Assemble a prompt, optionally recording it in history.
pub fn build(options: BuildOptions) -> Result<BuildOutcome, AppError> {
    let ctx = current_context()?;
    commands::build::execute(&ctx, options)
}

/// Catalog options for one parameter or all of them.
pub fn options(parameter: Option<Parameter>) -> Vec<ParameterOptions> {
    commands::options::execute(parameter)
}

/// Aspect ratios accepted by image generation.
pub fn aspect_ratios() -> &'static [CinematicOption] {
    commands::options::aspect_ratios()
}

/// Rewrite a subject as a cinematic one-liner.
pub fn enhance(subject: &str, images: &[ReferenceImage]) -> Result<String, AppError> {
    let client = create_client(&load_config()?)?;
    commands::enhance::execute(&client, subject, images)
}

/// Merge model-suggested parameter values into `state`.
pub fn suggest(
    state: &mut PromptState,
    images: &[ReferenceImage],
) -> Result<PromptPatch, AppError> {
    let client = create_client(&load_config()?)?;
    commands::suggest::execute(&client, state, images)
}

/// Generate images and write them under `output_dir`.
pub fn image(
    prompt: Option<String>,
    aspect_ratio: &str,
    model: ImageModel,
    output_dir: PathBuf,
) -> Result<ImageOutcome, AppError> {
    let home = config::home_dir()?;
    let client = create_client(&config::load_config(&home)?)?;
    let ctx = create_context(&home);
    let options = commands::image::ImageOptions {
        prompt,
        aspect_ratio: aspect_ratio.to_string(),
        model,
        output_dir,
    };
    commands::image::execute(&ctx, &client, options)
}

/// Generate a video, polling until it completes, and write it under `output_dir`.
pub fn video(
    prompt: Option<String>,
    reference: Option<ReferenceImage>,
    output_dir: PathBuf,
) -> Result<VideoOutcome, AppError> {
    let home = config::home_dir()?;
    let config = config::load_config(&home)?;
    let client = create_client(&config)?;
    let ctx = create_context(&home);
    let options = commands::video::VideoOptions {
        prompt,
        image: reference,
        output_dir,
        poll_interval: Duration::from_secs(config.gemini.poll_interval_secs),
        max_polls: config.gemini.max_polls,
    };
    commands::video::execute(&ctx, &client, options)
}

/// Optimize a rough prompt for a target platform.
pub fn optimize(
    prompt: &str,
    target: TargetAi,
    style: OptimizeStyle,
) -> Result<OptimizeOutcome, AppError> {
    let home = config::home_dir()?;
    let client = create_client(&config::load_config(&home)?)?;
    let ctx = create_context(&home);
    commands::optimize::execute(&ctx, &client, prompt, target, style)
}

pub fn template_list() -> Result<TemplateListing, AppError> {
    commands::template::list(&current_context()?)
}

pub fn template_show(id: &str) -> Result<ResolvedTemplate, AppError> {
    commands::template::show(&current_context()?, id)
}

/// Fill a template around `subject`; the API key is only needed for model-backed templates.
pub fn template_fill(
    id: &str,
    subject: &str,
    images: &[ReferenceImage],
) -> Result<FillOutcome, AppError> {
    let home = config::home_dir()?;
    let ctx = create_context(&home);
    let resolved = commands::template::show(&ctx, id)?;

    let client = if resolved.needs_model() {
        Some(create_client(&config::load_config(&home)?)?)
    } else {
        None
    };
    commands::template::fill(&ctx, client.as_ref(), &resolved, subject, images)
}

pub fn template_save(draft: TemplateDraft) -> Result<CustomTemplate, AppError> {
    commands::template::save(&current_context()?, draft)
}

pub fn template_delete(id: &str) -> Result<(), AppError> {
    commands::template::delete(&current_context()?, id)
}

pub fn history_list(kind: Option<&str>) -> Result<Vec<HistoryEntry>, AppError> {
    commands::history::list(&current_context()?, kind)
}

pub fn history_delete(id: &str) -> Result<(), AppError> {
    commands::history::delete(&current_context()?, id)
}

/// Reset a prompt state around a history entry and rebuild its prompt.
pub fn history_reuse(id: &str, format: OutputFormat) -> Result<ReuseOutcome, AppError> {
    commands::history::reuse(&current_context()?, id, format)
}
