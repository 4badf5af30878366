//! Prompt assembly: one deterministic encoding per [`OutputFormat`].
//!
//! XML and YAML are emitted by hand without escaping, and only the `default`
//! and `design-driven` encodings skip empty fields. Both behaviors are part of
//! the established output contract and are kept as-is.

use serde::Serialize;

use crate::domain::prompt_state::Settings;
use crate::domain::{OutputFormat, Parameter, PromptState, description};

const SCHEMA_CONTEXT: &str = "https://schema.org";
const ARTWORK_TYPE: &str = "VisualArtwork";
const ARTFORM: &str = "AI Generative Prompt";
const ABSTRACT: &str = "A structured prompt for generating AI visual media.";
const ATTRIBUTE_TYPE: &str = "Thing";
const ATTRIBUTE_NAME: &str = "Cinematic Properties";
const DIRECTION_HEADER: &str = "The creative and technical direction for this shot is as follows:\n";

/// Render `state` in the requested encoding.
pub fn build_prompt(state: &PromptState, format: OutputFormat) -> String {
    match format {
        OutputFormat::Default => build_default(state),
        OutputFormat::DesignDriven => build_design_driven(state),
        OutputFormat::Json => {
            to_pretty_json(&JsonPrompt { subject: &state.subject, settings: state.settings() })
        }
        OutputFormat::JsonLd => to_pretty_json(&JsonLdPrompt::new(state)),
        OutputFormat::Xml => build_xml(state),
        OutputFormat::Yaml => build_yaml(state),
    }
}

fn build_default(state: &PromptState) -> String {
    // Art style leads, then the subject, then the remaining parameters.
    let rest = Parameter::ALL
        .into_iter()
        .filter(|parameter| *parameter != Parameter::ArtStyle)
        .map(|parameter| state.get(parameter));

    [state.art_style.as_str(), state.subject.as_str()]
        .into_iter()
        .chain(rest)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn build_design_driven(state: &PromptState) -> String {
    let mut out = format!("{}.\n\n", state.subject);
    out.push_str(DIRECTION_HEADER);
    for (parameter, value) in state.settings().iter() {
        if value.is_empty() {
            continue;
        }
        out.push_str("- ");
        out.push_str(description::resolve(parameter, value));
        out.push('\n');
    }
    out
}

fn build_xml(state: &PromptState) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<Prompt>\n");
    xml.push_str(&format!("  <Subject>{}</Subject>\n", state.subject));
    xml.push_str("  <Settings>\n");
    for (parameter, value) in state.settings().iter() {
        let tag = parameter.xml_tag();
        xml.push_str(&format!("    <{tag}>{value}</{tag}>\n"));
    }
    xml.push_str("  </Settings>\n");
    xml.push_str("</Prompt>");
    xml
}

fn build_yaml(state: &PromptState) -> String {
    let mut yaml = format!("subject: {}\n", state.subject);
    yaml.push_str("settings:\n");
    for (parameter, value) in state.settings().iter() {
        yaml.push_str(&format!("  {}: {}\n", parameter.field_name(), value));
    }
    yaml
}

fn to_pretty_json<T: Serialize>(value: &T) -> String {
    // String-only documents cannot fail to serialize.
    serde_json::to_string_pretty(value).unwrap_or_else(|err| {
        tracing::error!(error = %err, "failed to serialize prompt");
        String::new()
    })
}

#[derive(Serialize)]
struct JsonPrompt<'a> {
    subject: &'a str,
    settings: Settings<'a>,
}

#[derive(Serialize)]
struct JsonLdPrompt<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    artform: &'static str,
    headline: &'a str,
    #[serde(rename = "abstract")]
    summary: &'static str,
    #[serde(rename = "characterAttribute")]
    character_attribute: CharacterAttribute<'a>,
}

#[derive(Serialize)]
struct CharacterAttribute<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    #[serde(flatten)]
    settings: Settings<'a>,
}

impl<'a> JsonLdPrompt<'a> {
    fn new(state: &'a PromptState) -> Self {
        Self {
            context: SCHEMA_CONTEXT,
            kind: ARTWORK_TYPE,
            artform: ARTFORM,
            headline: &state.subject,
            summary: ABSTRACT,
            character_attribute: CharacterAttribute {
                kind: ATTRIBUTE_TYPE,
                name: ATTRIBUTE_NAME,
                settings: state.settings(),
            },
        }
    }
}
