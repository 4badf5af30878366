use std::cell::{Cell, RefCell};

use crate::domain::{
    AppError, ImageModel, OptimizeStyle, OptimizerOutput, PromptPatch, ReferenceImage, TargetAi,
};
use crate::ports::{GenerationClient, VideoOperation};

/// Scripted generation client that records every call.
#[allow(dead_code)]
pub struct FakeGenerationClient {
    pub enhanced: String,
    pub suggestion: PromptPatch,
    pub images: Vec<String>,
    /// Polls answered with "not done" before the operation completes.
    pub pending_polls: Cell<u32>,
    pub video_bytes: Vec<u8>,
    pub optimized: OptimizerOutput,
    pub filled: String,
    pub text: String,
    pub calls: RefCell<Vec<String>>,
}

impl Default for FakeGenerationClient {
    fn default() -> Self {
        Self {
            enhanced: "An enhanced subject.".into(),
            suggestion: PromptPatch::default(),
            images: vec!["data:image/png;base64,iVBORw0KGgo=".into()],
            pending_polls: Cell::new(0),
            video_bytes: b"video".to_vec(),
            optimized: OptimizerOutput {
                optimized_prompt: "Optimized.".into(),
                what_changed: None,
                key_improvements: None,
                techniques_applied: None,
                pro_tip: None,
            },
            filled: "{\"filled\": true}".into(),
            text: "generated text".into(),
            calls: RefCell::new(Vec::new()),
        }
    }
}

#[allow(dead_code)]
impl FakeGenerationClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl GenerationClient for FakeGenerationClient {
    fn enhance_subject(
        &self,
        subject: &str,
        images: &[ReferenceImage],
    ) -> Result<String, AppError> {
        self.record(format!("enhance:{}:{}", subject, images.len()));
        Ok(self.enhanced.clone())
    }

    fn suggest_parameters(
        &self,
        subject: &str,
        images: &[ReferenceImage],
    ) -> Result<PromptPatch, AppError> {
        self.record(format!("suggest:{}:{}", subject, images.len()));
        Ok(self.suggestion.clone())
    }

    fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: &str,
        model: ImageModel,
    ) -> Result<Vec<String>, AppError> {
        self.record(format!("image:{}:{}:{}", prompt, aspect_ratio, model));
        Ok(self.images.clone())
    }

    fn start_video(
        &self,
        prompt: &str,
        image: Option<&ReferenceImage>,
    ) -> Result<VideoOperation, AppError> {
        self.record(format!("start_video:{}:{}", prompt, image.is_some()));
        Ok(VideoOperation::pending("operations/fake"))
    }

    fn poll_video(&self, operation: &VideoOperation) -> Result<VideoOperation, AppError> {
        self.record(format!("poll_video:{}", operation.name));
        let remaining = self.pending_polls.get();
        if remaining > 0 {
            self.pending_polls.set(remaining - 1);
            return Ok(VideoOperation::pending(operation.name.clone()));
        }
        Ok(VideoOperation {
            name: operation.name.clone(),
            done: true,
            video_uri: Some("https://example.test/video.mp4".into()),
        })
    }

    fn download_video(&self, uri: &str) -> Result<Vec<u8>, AppError> {
        self.record(format!("download_video:{}", uri));
        Ok(self.video_bytes.clone())
    }

    fn optimize_prompt(
        &self,
        prompt: &str,
        target: TargetAi,
        style: OptimizeStyle,
    ) -> Result<OptimizerOutput, AppError> {
        self.record(format!("optimize:{}:{}:{}", prompt, target, style));
        Ok(self.optimized.clone())
    }

    fn fill_template(
        &self,
        subject: &str,
        template: &str,
        images: &[ReferenceImage],
    ) -> Result<String, AppError> {
        self.record(format!("fill_template:{}:{}:{}", subject, template.len(), images.len()));
        Ok(self.filled.clone())
    }

    fn generate_text(&self, prompt: &str) -> Result<String, AppError> {
        self.record(format!("text:{}", prompt));
        Ok(self.text.clone())
    }
}
