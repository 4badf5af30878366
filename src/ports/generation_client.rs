//! Generation API client port definition.

use crate::domain::{
    AppError, ImageModel, OptimizeStyle, OptimizerOutput, PromptPatch, ReferenceImage, TargetAi,
};

/// Handle for a long-running video generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoOperation {
    /// Operation resource name, e.g. `models/veo-2.0-generate-001/operations/abc`.
    pub name: String,
    /// Whether the operation has finished.
    pub done: bool,
    /// URI of the generated video once the operation is done.
    pub video_uri: Option<String>,
}

impl VideoOperation {
    pub fn pending(name: impl Into<String>) -> Self {
        Self { name: name.into(), done: false, video_uri: None }
    }
}

/// Port for the hosted text, image and video generation models.
pub trait GenerationClient {
    /// Rewrite a plain subject as a single cinematic sentence.
    fn enhance_subject(&self, subject: &str, images: &[ReferenceImage]) -> Result<String, AppError>;

    /// Ask the model to choose parameter values for a subject.
    fn suggest_parameters(
        &self,
        subject: &str,
        images: &[ReferenceImage],
    ) -> Result<PromptPatch, AppError>;

    /// Generate images; each result is a `data:image/png;base64,...` URL.
    fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: &str,
        model: ImageModel,
    ) -> Result<Vec<String>, AppError>;

    /// Start a video generation.
    fn start_video(
        &self,
        prompt: &str,
        image: Option<&ReferenceImage>,
    ) -> Result<VideoOperation, AppError>;

    /// Refresh the state of a video generation.
    fn poll_video(&self, operation: &VideoOperation) -> Result<VideoOperation, AppError>;

    /// Download a finished video.
    fn download_video(&self, uri: &str) -> Result<Vec<u8>, AppError>;

    /// Rewrite a rough prompt for a target platform.
    fn optimize_prompt(
        &self,
        prompt: &str,
        target: TargetAi,
        style: OptimizeStyle,
    ) -> Result<OptimizerOutput, AppError>;

    /// Fill a JSON prompt template around a subject.
    fn fill_template(
        &self,
        subject: &str,
        template: &str,
        images: &[ReferenceImage],
    ) -> Result<String, AppError>;

    /// Plain text completion.
    fn generate_text(&self, prompt: &str) -> Result<String, AppError>;
}
