//! Built-in and custom template operations.

use tracing::info;

use crate::app::AppContext;
use crate::domain::template::{fill_direct, fill_offline};
use crate::domain::{
    AppError, Artifact, BuiltinTemplate, CustomTemplate, HistoryEntry, ReferenceImage,
    TemplateDraft, TemplateMode, sanitize,
};
use crate::ports::{BuiltinTemplateCatalog, GenerationClient, HistoryStore, TemplateStore};

/// Every template the user can fill.
#[derive(Debug, Clone)]
pub struct TemplateListing {
    pub builtin: Vec<BuiltinTemplate>,
    pub custom: Vec<CustomTemplate>,
}

/// A template looked up by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTemplate {
    Builtin(BuiltinTemplate),
    Custom(CustomTemplate),
}

impl ResolvedTemplate {
    pub fn id(&self) -> &str {
        match self {
            ResolvedTemplate::Builtin(template) => &template.id,
            ResolvedTemplate::Custom(template) => &template.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ResolvedTemplate::Builtin(template) => &template.name,
            ResolvedTemplate::Custom(template) => &template.name,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            ResolvedTemplate::Builtin(template) => &template.content,
            ResolvedTemplate::Custom(template) => &template.content,
        }
    }

    /// Custom templates are always filled by the model.
    pub fn mode(&self) -> TemplateMode {
        match self {
            ResolvedTemplate::Builtin(template) => template.mode,
            ResolvedTemplate::Custom(_) => TemplateMode::Fill,
        }
    }

    pub fn needs_model(&self) -> bool {
        self.mode() != TemplateMode::Offline
    }

    /// History source recorded for filled results.
    pub fn source(&self) -> String {
        match self {
            ResolvedTemplate::Builtin(template) => template.name.clone(),
            ResolvedTemplate::Custom(template) => format!("Custom: {}", template.name),
        }
    }
}

pub fn list<H, T, B>(ctx: &AppContext<H, T, B>) -> Result<TemplateListing, AppError>
where
    H: HistoryStore,
    T: TemplateStore,
    B: BuiltinTemplateCatalog,
{
    Ok(TemplateListing { builtin: ctx.builtins().templates()?, custom: ctx.templates().list()? })
}

/// Look up a template by id; built-ins take precedence over custom templates.
pub fn show<H, T, B>(ctx: &AppContext<H, T, B>, id: &str) -> Result<ResolvedTemplate, AppError>
where
    H: HistoryStore,
    T: TemplateStore,
    B: BuiltinTemplateCatalog,
{
    if let Some(template) = ctx.builtins().template(id)? {
        return Ok(ResolvedTemplate::Builtin(template));
    }

    ctx.templates()
        .list()?
        .into_iter()
        .find(|template| template.id == id)
        .map(ResolvedTemplate::Custom)
        .ok_or_else(|| AppError::TemplateNotFound(id.to_string()))
}

#[derive(Debug, Clone)]
pub struct FillOutcome {
    pub prompt: String,
    pub entry: HistoryEntry,
}

/// Turn `subject` into a prompt using `template`.
///
/// `client` is only consulted for templates that need the model; offline
/// templates are filled locally.
pub fn fill<H, T, B, G>(
    ctx: &AppContext<H, T, B>,
    client: Option<&G>,
    template: &ResolvedTemplate,
    subject: &str,
    images: &[ReferenceImage],
) -> Result<FillOutcome, AppError>
where
    H: HistoryStore,
    T: TemplateStore,
    B: BuiltinTemplateCatalog,
    G: GenerationClient,
{
    if subject.trim().is_empty() {
        return Err(AppError::EmptySubject);
    }

    info!(template = template.id(), mode = %template.mode(), "filling template");
    let prompt = match template.mode() {
        TemplateMode::Offline => fill_offline(template.content(), subject),
        mode => {
            let client = client.ok_or_else(|| {
                AppError::config_error(format!(
                    "Template '{}' requires the Gemini API",
                    template.id()
                ))
            })?;
            let reply = match mode {
                TemplateMode::Direct => {
                    client.generate_text(&fill_direct(template.content(), subject))?
                }
                _ => client.fill_template(subject, template.content(), images)?,
            };
            sanitize(&reply).trim().to_string()
        }
    };

    let entry = ctx.history().append(Artifact::Prompt {
        prompt: prompt.clone(),
        subject: subject.to_string(),
        source: template.source(),
    })?;

    Ok(FillOutcome { prompt, entry })
}

pub fn save<H, T, B>(
    ctx: &AppContext<H, T, B>,
    draft: TemplateDraft,
) -> Result<CustomTemplate, AppError>
where
    H: HistoryStore,
    T: TemplateStore,
    B: BuiltinTemplateCatalog,
{
    ctx.templates().save(draft)
}

pub fn delete<H, T, B>(ctx: &AppContext<H, T, B>, id: &str) -> Result<(), AppError>
where
    H: HistoryStore,
    T: TemplateStore,
    B: BuiltinTemplateCatalog,
{
    if ctx.templates().delete(id)? {
        Ok(())
    } else {
        Err(AppError::TemplateNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeGenerationClient, memory_context};

    fn custom_draft() -> TemplateDraft {
        TemplateDraft {
            id: None,
            name: "Poster".into(),
            content: "{\"subject\": \"[SUBJECT]\", \"style\": \"[STYLE]\"}".into(),
        }
    }

    #[test]
    fn list_includes_builtins_and_custom() {
        let ctx = memory_context();
        save(&ctx, custom_draft()).unwrap();

        let listing = list(&ctx).unwrap();

        assert!(listing.builtin.iter().any(|t| t.id == "retro-3d-icon"));
        assert_eq!(listing.custom.len(), 1);
    }

    #[test]
    fn offline_fill_needs_no_client() {
        let ctx = memory_context();
        let template = show(&ctx, "retro-3d-icon").unwrap();

        let outcome =
            fill::<_, _, _, FakeGenerationClient>(&ctx, None, &template, "a teapot", &[]).unwrap();

        assert!(outcome.prompt.contains("\"a teapot\""));
        assert!(!outcome.prompt.contains("[your object here]"));
        assert_eq!(outcome.entry.artifact.source(), template.name());
    }

    #[test]
    fn direct_fill_substitutes_idea_and_sends_text() {
        let ctx = memory_context();
        let client = FakeGenerationClient { text: "A crisp prompt.".into(), ..Default::default() };
        let template = show(&ctx, "okay-prompt").unwrap();

        let outcome = fill(&ctx, Some(&client), &template, "a koi pond", &[]).unwrap();

        assert_eq!(outcome.prompt, "A crisp prompt.");
        let calls = client.calls();
        assert!(calls[0].starts_with("text:"));
        assert!(calls[0].contains("a koi pond"));
        assert!(!calls[0].contains("{user_idea}"));
    }

    #[test]
    fn custom_templates_use_model_fill_and_prefixed_source() {
        let ctx = memory_context();
        let client = FakeGenerationClient::new();
        let saved = save(&ctx, custom_draft()).unwrap();
        let template = show(&ctx, &saved.id).unwrap();

        let outcome = fill(&ctx, Some(&client), &template, "a lantern", &[]).unwrap();

        assert_eq!(outcome.prompt, client.filled);
        assert_eq!(outcome.entry.artifact.source(), "Custom: Poster");
        assert!(client.calls()[0].starts_with("fill_template:a lantern:"));
    }

    #[test]
    fn model_templates_require_a_client() {
        let ctx = memory_context();
        let template = show(&ctx, "laika-image").unwrap();

        let err = fill::<_, _, _, FakeGenerationClient>(&ctx, None, &template, "a moth", &[])
            .unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let ctx = memory_context();
        assert!(matches!(show(&ctx, "nope"), Err(AppError::TemplateNotFound(_))));
        assert!(matches!(delete(&ctx, "nope"), Err(AppError::TemplateNotFound(_))));
    }

    #[test]
    fn save_with_id_updates_in_place() {
        let ctx = memory_context();
        let saved = save(&ctx, custom_draft()).unwrap();
        let updated = save(
            &ctx,
            TemplateDraft {
                id: Some(saved.id.clone()),
                name: "Renamed".into(),
                content: "{}".into(),
            },
        )
        .unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(list(&ctx).unwrap().custom, vec![updated]);
    }
}
