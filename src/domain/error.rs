use std::io;

use thiserror::Error;

/// Library-wide error type for prompt-architect operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration file contains invalid values.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Required environment variable is not set.
    #[error("Environment variable '{0}' is not set")]
    EnvironmentVariableMissing(String),

    /// Parameter name does not match any cinematic parameter.
    #[error("Unknown parameter '{0}'")]
    UnknownParameter(String),

    /// Aspect ratio is not one of the supported values.
    #[error("Invalid aspect ratio '{value}': must be one of {available}")]
    InvalidAspectRatio { value: String, available: String },

    /// Image model identifier is not supported.
    #[error(
        "Invalid image model '{0}': must be imagen-4.0-generate-001 or gemini-2.5-flash-image-preview"
    )]
    InvalidImageModel(String),

    /// A subject is required but was empty.
    #[error("Please enter a subject first.")]
    EmptySubject,

    /// A prompt is required but was empty.
    #[error("Please enter a prompt first.")]
    EmptyPrompt,

    /// Reference image could not be loaded.
    #[error("Failed to load reference image '{path}': {reason}")]
    ReferenceImage { path: String, reason: String },

    /// Generation API request failed.
    #[error("Gemini API error: {message}")]
    GeminiApiError { message: String, status: Option<u16> },

    /// Generation API returned something the client could not use.
    #[error("{0}")]
    InvalidAiResponse(String),

    /// Video generation did not finish within the configured number of polls.
    #[error("Video generation did not complete after {polls} status checks")]
    VideoTimeout { polls: u32 },

    /// History entry not found.
    #[error("History item '{0}' not found")]
    HistoryItemNotFound(String),

    /// Template not found (built-in or custom).
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    /// Template field failed validation.
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    /// Instruction template failed to render.
    #[error("Failed to render instruction '{name}': {reason}")]
    InstructionRender { name: String, reason: String },

    /// Interactive prompt failed.
    #[error("Interactive input failed: {0}")]
    Interaction(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidConfig(_)
            | AppError::TomlParseError(_)
            | AppError::UnknownParameter(_)
            | AppError::InvalidAspectRatio { .. }
            | AppError::InvalidImageModel(_)
            | AppError::EmptySubject
            | AppError::EmptyPrompt
            | AppError::ReferenceImage { .. }
            | AppError::InvalidTemplate(_)
            | AppError::Interaction(_) => io::ErrorKind::InvalidInput,
            AppError::EnvironmentVariableMissing(_)
            | AppError::HistoryItemNotFound(_)
            | AppError::TemplateNotFound(_) => io::ErrorKind::NotFound,
            AppError::InvalidAiResponse(_)
            | AppError::InstructionRender { .. }
            | AppError::Json(_)
            | AppError::Yaml(_) => io::ErrorKind::InvalidData,
            AppError::VideoTimeout { .. } => io::ErrorKind::TimedOut,
            AppError::GeminiApiError { .. } => io::ErrorKind::Other,
        }
    }
}
