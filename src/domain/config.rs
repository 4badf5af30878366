//! Configuration loaded from `config.toml` in the prompt-architect home.

use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

use crate::domain::{AppError, OutputFormat};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub gemini: GeminiApiConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.gemini.validate()
    }
}

/// Output defaults for `build`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Unknown tags select the default encoding.
    #[serde(default, deserialize_with = "lenient_format")]
    pub default_format: OutputFormat,
}

fn lenient_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: Deserializer<'de>,
{
    let tag = String::deserialize(deserializer)?;
    Ok(OutputFormat::from_tag_or_default(&tag))
}

/// Gemini API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiApiConfig {
    /// Base URL; model endpoints are resolved beneath it.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Model used for enhancement, suggestion, templates and optimization.
    #[serde(default = "default_text_model")]
    pub text_model: String,
    #[serde(default = "default_video_model")]
    pub video_model: String,
    /// Delay between video operation status checks.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Status checks before a video generation is abandoned.
    #[serde(default = "default_max_polls")]
    pub max_polls: u32,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout(),
            text_model: default_text_model(),
            video_model: default_video_model(),
            poll_interval_secs: default_poll_interval_secs(),
            max_polls: default_max_polls(),
        }
    }
}

impl GeminiApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.poll_interval_secs == 0 {
            return Err(AppError::InvalidConfig(
                "poll_interval_secs must be greater than 0".to_string(),
            ));
        }
        if self.max_polls == 0 {
            return Err(AppError::InvalidConfig("max_polls must be greater than 0".to_string()));
        }
        if self.text_model.trim().is_empty() {
            return Err(AppError::InvalidConfig("text_model must not be empty".to_string()));
        }
        if self.video_model.trim().is_empty() {
            return Err(AppError::InvalidConfig("video_model must not be empty".to_string()));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

fn default_timeout() -> u64 {
    60
}

fn default_text_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_video_model() -> String {
    "veo-2.0-generate-001".to_string()
}

fn default_poll_interval_secs() -> u64 {
    10
}

fn default_max_polls() -> u32 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert_eq!(config.output.default_format, OutputFormat::Default);
        assert_eq!(config.gemini.text_model, "gemini-2.5-flash");
        assert_eq!(config.gemini.poll_interval_secs, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
[output]
default_format = "json-ld"

[gemini]
timeout_secs = 5
"#,
        )
        .unwrap();
        assert_eq!(config.output.default_format, OutputFormat::JsonLd);
        assert_eq!(config.gemini.timeout_secs, 5);
        assert_eq!(config.gemini.max_polls, 60);
    }

    #[test]
    fn unknown_default_format_falls_back() {
        let config: AppConfig =
            toml::from_str("[output]\ndefault_format = \"markdown\"\n").unwrap();
        assert_eq!(config.output.default_format, OutputFormat::Default);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[gemini]\nretries = 3\n");
        assert!(result.is_err());
    }

    #[test]
    fn zero_values_fail_validation() {
        let config = GeminiApiConfig { poll_interval_secs: 0, ..Default::default() };
        assert!(config.validate().is_err());
        let config = GeminiApiConfig { max_polls: 0, ..Default::default() };
        assert!(config.validate().is_err());
        let config = GeminiApiConfig { text_model: " ".into(), ..Default::default() };
        assert!(config.validate().is_err());
    }
}
