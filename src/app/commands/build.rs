//! Assemble a prompt from a prompt state.

use tracing::debug;

use crate::app::AppContext;
use crate::domain::history::SOURCE_PROMPT_BUILDER;
use crate::domain::{AppError, Artifact, HistoryEntry, OutputFormat, PromptState, build_prompt};
use crate::ports::{BuiltinTemplateCatalog, HistoryStore, TemplateStore};

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub state: PromptState,
    pub format: OutputFormat,
    /// Record the result in history.
    pub save: bool,
}

#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub prompt: String,
    pub entry: Option<HistoryEntry>,
}

pub fn execute<H, T, B>(
    ctx: &AppContext<H, T, B>,
    options: BuildOptions,
) -> Result<BuildOutcome, AppError>
where
    H: HistoryStore,
    T: TemplateStore,
    B: BuiltinTemplateCatalog,
{
    let prompt = build_prompt(&options.state, options.format);
    debug!(format = %options.format, length = prompt.len(), "built prompt");

    if !options.save {
        return Ok(BuildOutcome { prompt, entry: None });
    }

    if options.state.subject.trim().is_empty() {
        return Err(AppError::EmptySubject);
    }

    let entry = ctx.history().append(Artifact::Prompt {
        prompt: prompt.clone(),
        subject: options.state.subject.clone(),
        source: SOURCE_PROMPT_BUILDER.to_string(),
    })?;

    Ok(BuildOutcome { prompt, entry: Some(entry) })
}
