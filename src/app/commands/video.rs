//! Video generation with operation polling.

use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use tracing::{debug, info};
use url::Url;

use crate::app::AppContext;
use crate::app::commands::history::resolve_prompt;
use crate::domain::history::SOURCE_VIDEO_GENERATOR;
use crate::domain::{AppError, Artifact, HistoryEntry, ReferenceImage};
use crate::ports::{BuiltinTemplateCatalog, GenerationClient, HistoryStore, TemplateStore};

#[derive(Debug, Clone)]
pub struct VideoOptions {
    /// Prompt to render; the latest prompt in history when absent.
    pub prompt: Option<String>,
    pub image: Option<ReferenceImage>,
    pub output_dir: PathBuf,
    pub poll_interval: Duration,
    pub max_polls: u32,
}

#[derive(Debug, Clone)]
pub struct VideoOutcome {
    pub file: PathBuf,
    pub entry: HistoryEntry,
}

pub fn execute<H, T, B, G>(
    ctx: &AppContext<H, T, B>,
    client: &G,
    options: VideoOptions,
) -> Result<VideoOutcome, AppError>
where
    H: HistoryStore,
    T: TemplateStore,
    B: BuiltinTemplateCatalog,
    G: GenerationClient,
{
    let prompt = resolve_prompt(ctx.history(), options.prompt)?;

    let mut operation = client.start_video(&prompt, options.image.as_ref())?;
    info!(operation = %operation.name, "video generation started");

    let mut polls = 0;
    while !operation.done {
        if polls >= options.max_polls {
            return Err(AppError::VideoTimeout { polls });
        }
        thread::sleep(options.poll_interval);
        operation = client.poll_video(&operation)?;
        polls += 1;
        debug!(polls, done = operation.done, "polled video operation");
    }

    let uri = operation.video_uri.ok_or_else(|| {
        AppError::InvalidAiResponse("Video generation finished without a video.".into())
    })?;
    let bytes = client.download_video(&uri)?;

    fs::create_dir_all(&options.output_dir)?;
    let file = options
        .output_dir
        .join(format!("video-{}.mp4", chrono::Local::now().format("%Y%m%d-%H%M%S")));
    fs::write(&file, &bytes)?;
    let video_url = Url::from_file_path(fs::canonicalize(&file)?).map_err(|()| {
        AppError::Configuration(format!("Cannot express {} as a file URL", file.display()))
    })?;

    let entry = ctx.history().append(Artifact::Video {
        video_url: video_url.to_string(),
        prompt,
        source: SOURCE_VIDEO_GENERATOR.to_string(),
    })?;

    Ok(VideoOutcome { file, entry })
}
