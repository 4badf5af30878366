//! Image generation.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::app::AppContext;
use crate::app::commands::history::resolve_prompt;
use crate::domain::media::validate_aspect_ratio;
use crate::domain::reference_image::extension_for;
use crate::domain::{AppError, Artifact, HistoryEntry, ImageModel, ImageSettings, ReferenceImage};
use crate::ports::{BuiltinTemplateCatalog, GenerationClient, HistoryStore, TemplateStore};

#[derive(Debug, Clone)]
pub struct ImageOptions {
    /// Prompt to render; the latest prompt in history when absent.
    pub prompt: Option<String>,
    pub aspect_ratio: String,
    pub model: ImageModel,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ImageOutcome {
    pub files: Vec<PathBuf>,
    pub entry: HistoryEntry,
}

pub fn execute<H, T, B, G>(
    ctx: &AppContext<H, T, B>,
    client: &G,
    options: ImageOptions,
) -> Result<ImageOutcome, AppError>
where
    H: HistoryStore,
    T: TemplateStore,
    B: BuiltinTemplateCatalog,
    G: GenerationClient,
{
    validate_aspect_ratio(&options.aspect_ratio)?;
    let prompt = resolve_prompt(ctx.history(), options.prompt)?;

    info!(model = %options.model, aspect_ratio = %options.aspect_ratio, "generating image");
    let images = client.generate_image(&prompt, &options.aspect_ratio, options.model)?;
    let Some(first) = images.first().cloned() else {
        return Err(AppError::InvalidAiResponse(
            "The model didn't return an image. Please try a different prompt or model.".into(),
        ));
    };

    fs::create_dir_all(&options.output_dir)?;
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let mut files = Vec::with_capacity(images.len());
    for (index, data_url) in images.iter().enumerate() {
        let image = ReferenceImage::from_data_uri(data_url).ok_or_else(|| {
            AppError::InvalidAiResponse("The model returned a malformed image.".into())
        })?;
        let path = options
            .output_dir
            .join(format!("image-{}-{}.{}", stamp, index + 1, extension_for(&image.mime_type)));
        fs::write(&path, image.decode()?)?;
        files.push(path);
    }

    let entry = ctx.history().append(Artifact::Image {
        image_data_url: first,
        prompt,
        settings: ImageSettings {
            aspect_ratio: options.aspect_ratio,
            model: options.model.id().to_string(),
        },
    })?;

    Ok(ImageOutcome { files, entry })
}
