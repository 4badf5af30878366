//! Subject enhancement.

use tracing::info;

use crate::domain::{AppError, ReferenceImage, sanitize};
use crate::ports::GenerationClient;

/// Ask the model for a more cinematic version of `subject`.
pub fn execute<G: GenerationClient>(
    client: &G,
    subject: &str,
    images: &[ReferenceImage],
) -> Result<String, AppError> {
    if subject.trim().is_empty() {
        return Err(AppError::EmptySubject);
    }

    info!(images = images.len(), "enhancing subject");
    let enhanced = client.enhance_subject(subject, images)?;
    Ok(sanitize(&enhanced).trim().to_string())
}
