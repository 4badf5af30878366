use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Encoding produced by the prompt builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Comma-joined keyword list.
    #[default]
    Default,
    /// Narrative bullet list of curated sentences.
    DesignDriven,
    Json,
    Yaml,
    Xml,
    /// schema.org `VisualArtwork` document.
    JsonLd,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 6] = [
        OutputFormat::Default,
        OutputFormat::DesignDriven,
        OutputFormat::Json,
        OutputFormat::Yaml,
        OutputFormat::Xml,
        OutputFormat::JsonLd,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            OutputFormat::Default => "default",
            OutputFormat::DesignDriven => "design-driven",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Xml => "xml",
            OutputFormat::JsonLd => "json-ld",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Default => "Default",
            OutputFormat::DesignDriven => "Design-Driven",
            OutputFormat::Json => "JSON",
            OutputFormat::Yaml => "YAML",
            OutputFormat::Xml => "XML",
            OutputFormat::JsonLd => "JSON-LD",
        }
    }

    pub fn from_tag(tag: &str) -> Option<OutputFormat> {
        OutputFormat::ALL.into_iter().find(|format| format.tag() == tag)
    }

    /// Lenient lookup: unknown tags select the default encoding.
    pub fn from_tag_or_default(tag: &str) -> OutputFormat {
        OutputFormat::from_tag(tag).unwrap_or_else(|| {
            tracing::warn!(tag, "unknown output format, falling back to default");
            OutputFormat::Default
        })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::from_tag(s).ok_or_else(|| {
            let available: Vec<&str> = OutputFormat::ALL.iter().map(|f| f.tag()).collect();
            AppError::InvalidConfig(format!(
                "unknown output format '{}': must be one of {}",
                s,
                available.join(", ")
            ))
        })
    }
}
