use include_dir::{Dir, include_dir};
use serde::Deserialize;

use crate::domain::{AppError, BuiltinTemplate, TemplateKind, TemplateMode};
use crate::ports::BuiltinTemplateCatalog;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

const MANIFEST_FILE: &str = "manifest.yml";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Manifest {
    templates: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestEntry {
    id: String,
    name: String,
    kind: TemplateKind,
    mode: TemplateMode,
    file: String,
}

/// Built-in templates compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedTemplateCatalog;

impl EmbeddedTemplateCatalog {
    pub fn new() -> Self {
        Self
    }
}

fn read_asset(path: &str) -> Result<&'static str, AppError> {
    TEMPLATES_DIR
        .get_file(path)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| {
            AppError::InvalidTemplate(format!("missing embedded template asset '{}'", path))
        })
}

impl BuiltinTemplateCatalog for EmbeddedTemplateCatalog {
    fn templates(&self) -> Result<Vec<BuiltinTemplate>, AppError> {
        let manifest: Manifest = serde_yaml::from_str(read_asset(MANIFEST_FILE)?)?;

        manifest
            .templates
            .into_iter()
            .map(|entry| {
                let content = read_asset(&entry.file)?.trim_end().to_string();
                Ok(BuiltinTemplate {
                    id: entry.id,
                    name: entry.name,
                    kind: entry.kind,
                    mode: entry.mode,
                    content,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::domain::template::{DIRECT_PLACEHOLDER, OFFLINE_PLACEHOLDER};

    #[test]
    fn manifest_entries_resolve_to_assets() {
        let templates = EmbeddedTemplateCatalog::new().templates().unwrap();
        assert!(!templates.is_empty());

        let ids: HashSet<&str> = templates.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), templates.len(), "template ids must be unique");
    }

    #[test]
    fn json_templates_parse_as_json() {
        for template in EmbeddedTemplateCatalog::new().templates().unwrap() {
            if template.mode != TemplateMode::Direct {
                let parsed: Result<serde_json::Value, _> = serde_json::from_str(&template.content);
                assert!(parsed.is_ok(), "{} is not valid JSON", template.id);
            }
        }
    }

    #[test]
    fn placeholders_match_modes() {
        for template in EmbeddedTemplateCatalog::new().templates().unwrap() {
            match template.mode {
                TemplateMode::Offline => {
                    assert!(template.content.contains(OFFLINE_PLACEHOLDER), "{}", template.id)
                }
                TemplateMode::Direct => {
                    assert!(template.content.contains(DIRECT_PLACEHOLDER), "{}", template.id)
                }
                TemplateMode::Fill => {}
            }
        }
    }

    #[test]
    fn lookup_by_id() {
        let catalog = EmbeddedTemplateCatalog::new();
        let template = catalog.template("laika-video").unwrap().unwrap();
        assert_eq!(template.kind, TemplateKind::Video);
        assert!(catalog.template("unknown").unwrap().is_none());
    }
}
