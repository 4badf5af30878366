//! Parameter suggestion merged into a prompt state.

use tracing::info;

use crate::domain::{AppError, PromptPatch, PromptState, ReferenceImage};
use crate::ports::GenerationClient;

/// Ask the model for parameter values and merge them into `state`.
///
/// Only fields present in the suggestion are overwritten.
pub fn execute<G: GenerationClient>(
    client: &G,
    state: &mut PromptState,
    images: &[ReferenceImage],
) -> Result<PromptPatch, AppError> {
    if state.subject.trim().is_empty() {
        return Err(AppError::EmptySubject);
    }

    let patch = client.suggest_parameters(&state.subject, images)?;
    if patch.is_empty() {
        info!("suggestion contained no parameters");
    }
    state.apply(&patch);
    Ok(patch)
}
