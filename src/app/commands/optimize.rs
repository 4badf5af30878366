//! Prompt optimization for a target platform.

use tracing::info;

use crate::app::AppContext;
use crate::domain::history::SOURCE_PROMPT_OPTIMIZER;
use crate::domain::{
    AppError, Artifact, HistoryEntry, OptimizeStyle, OptimizerOutput, TargetAi, sanitize,
};
use crate::ports::{BuiltinTemplateCatalog, GenerationClient, HistoryStore, TemplateStore};

#[derive(Debug, Clone)]
pub struct OptimizeOutcome {
    pub output: OptimizerOutput,
    pub entry: HistoryEntry,
}

pub fn execute<H, T, B, G>(
    ctx: &AppContext<H, T, B>,
    client: &G,
    prompt: &str,
    target: TargetAi,
    style: OptimizeStyle,
) -> Result<OptimizeOutcome, AppError>
where
    H: HistoryStore,
    T: TemplateStore,
    B: BuiltinTemplateCatalog,
    G: GenerationClient,
{
    if prompt.trim().is_empty() {
        return Err(AppError::EmptyPrompt);
    }

    info!(%target, %style, "optimizing prompt");
    let raw = client.optimize_prompt(prompt, target, style)?;
    let clean = |text: Option<String>| text.map(|text| sanitize(&text).trim().to_string());
    let output = OptimizerOutput {
        optimized_prompt: sanitize(&raw.optimized_prompt).trim().to_string(),
        what_changed: clean(raw.what_changed),
        key_improvements: clean(raw.key_improvements),
        techniques_applied: clean(raw.techniques_applied),
        pro_tip: clean(raw.pro_tip),
    };

    let entry = ctx.history().append(Artifact::Prompt {
        prompt: output.optimized_prompt.clone(),
        subject: prompt.to_string(),
        source: SOURCE_PROMPT_OPTIMIZER.to_string(),
    })?;

    Ok(OptimizeOutcome { output, entry })
}
