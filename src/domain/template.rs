//! Prompt templates: embedded built-ins and user-defined custom templates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Placeholder replaced with the quoted subject by offline templates.
pub const OFFLINE_PLACEHOLDER: &str = "\"[your object here]\"";
/// Placeholder replaced with the raw subject by direct templates.
pub const DIRECT_PLACEHOLDER: &str = "{user_idea}";

/// A user-defined template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTemplate {
    pub id: String,
    pub name: String,
    pub content: String,
}

/// Input to a template save: with an `id` it updates, without it creates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TemplateDraft {
    pub id: Option<String>,
    pub name: String,
    pub content: String,
}

impl TemplateDraft {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidTemplate("name must not be empty".into()));
        }
        if self.content.trim().is_empty() {
            return Err(AppError::InvalidTemplate("content must not be empty".into()));
        }
        Ok(())
    }
}

/// Apply `draft` to `templates`, updating in place or inserting at the front.
pub fn upsert(
    templates: &mut Vec<CustomTemplate>,
    draft: TemplateDraft,
) -> Result<CustomTemplate, AppError> {
    draft.validate()?;

    if let Some(id) = draft.id.as_deref()
        && let Some(existing) = templates.iter_mut().find(|template| template.id == id)
    {
        existing.name = draft.name;
        existing.content = draft.content;
        return Ok(existing.clone());
    }

    let template = CustomTemplate {
        id: draft.id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
        name: draft.name,
        content: draft.content,
    };
    templates.insert(0, template.clone());
    Ok(template)
}

/// Remove the template with `id`; returns whether anything was removed.
pub fn remove(templates: &mut Vec<CustomTemplate>, id: &str) -> bool {
    let before = templates.len();
    templates.retain(|template| template.id != id);
    templates.len() != before
}

/// Which generator a built-in template targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Image,
    Video,
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateKind::Image => f.write_str("image"),
            TemplateKind::Video => f.write_str("video"),
        }
    }
}

/// How a template turns a subject into a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateMode {
    /// The model fills the template's JSON placeholders.
    Fill,
    /// `{user_idea}` is substituted and the result sent to the model as-is.
    Direct,
    /// `"[your object here]"` is substituted locally; no model call.
    Offline,
}

impl fmt::Display for TemplateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateMode::Fill => f.write_str("fill"),
            TemplateMode::Direct => f.write_str("direct"),
            TemplateMode::Offline => f.write_str("offline"),
        }
    }
}

/// An embedded template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinTemplate {
    pub id: String,
    pub name: String,
    pub kind: TemplateKind,
    pub mode: TemplateMode,
    pub content: String,
}

/// Substitute the quoted subject into an offline template.
pub fn fill_offline(content: &str, subject: &str) -> String {
    content.replacen(OFFLINE_PLACEHOLDER, &format!("\"{}\"", subject), 1)
}

/// Substitute the subject into a direct template.
pub fn fill_direct(content: &str, subject: &str) -> String {
    content.replacen(DIRECT_PLACEHOLDER, subject, 1)
}

/// Drop markdown code fences from a model reply.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}
