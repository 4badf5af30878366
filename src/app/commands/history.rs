//! History listing, deletion and reuse.

use crate::app::AppContext;
use crate::domain::{AppError, Artifact, HistoryEntry, OutputFormat, PromptState, build_prompt};
use crate::ports::{BuiltinTemplateCatalog, HistoryStore, TemplateStore};

/// Entries newest first, optionally restricted to one artifact type.
pub fn list<H, T, B>(
    ctx: &AppContext<H, T, B>,
    kind: Option<&str>,
) -> Result<Vec<HistoryEntry>, AppError>
where
    H: HistoryStore,
    T: TemplateStore,
    B: BuiltinTemplateCatalog,
{
    let entries = ctx.history().list()?;
    Ok(match kind {
        Some(kind) => entries.into_iter().filter(|entry| entry.artifact.kind() == kind).collect(),
        None => entries,
    })
}

pub fn delete<H, T, B>(ctx: &AppContext<H, T, B>, id: &str) -> Result<(), AppError>
where
    H: HistoryStore,
    T: TemplateStore,
    B: BuiltinTemplateCatalog,
{
    if ctx.history().delete(id)? {
        Ok(())
    } else {
        Err(AppError::HistoryItemNotFound(id.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct ReuseOutcome {
    pub state: PromptState,
    pub prompt: String,
}

/// Rebuild a default prompt state around a stored artifact.
pub fn reuse<H, T, B>(
    ctx: &AppContext<H, T, B>,
    id: &str,
    format: OutputFormat,
) -> Result<ReuseOutcome, AppError>
where
    H: HistoryStore,
    T: TemplateStore,
    B: BuiltinTemplateCatalog,
{
    let entry =
        ctx.history().find(id)?.ok_or_else(|| AppError::HistoryItemNotFound(id.to_string()))?;

    let mut state = PromptState::default();
    state.reuse(entry.artifact.reuse_subject());
    let prompt = build_prompt(&state, format);
    Ok(ReuseOutcome { state, prompt })
}

/// The most recent prompt artifact's text; image and video generation fall back to it.
pub fn latest_prompt<H: HistoryStore>(history: &H) -> Result<Option<String>, AppError> {
    Ok(history.list()?.into_iter().find_map(|entry| match entry.artifact {
        Artifact::Prompt { prompt, .. } => Some(prompt),
        _ => None,
    }))
}

/// Use `explicit` when non-blank, otherwise the latest prompt in history.
pub(crate) fn resolve_prompt<H: HistoryStore>(
    history: &H,
    explicit: Option<String>,
) -> Result<String, AppError> {
    let prompt = match explicit.filter(|prompt| !prompt.trim().is_empty()) {
        Some(prompt) => Some(prompt),
        None => latest_prompt(history)?,
    };
    prompt.ok_or(AppError::EmptyPrompt)
}
