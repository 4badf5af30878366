//! Generated-artifact history.

use serde::{Deserialize, Serialize};

/// Maximum number of entries retained; older entries are evicted first.
pub const HISTORY_LIMIT: usize = 100;

pub const SOURCE_PROMPT_BUILDER: &str = "Prompt Builder";
pub const SOURCE_VIDEO_GENERATOR: &str = "Video Generator";
pub const SOURCE_PROMPT_OPTIMIZER: &str = "Prompt Optimizer";

/// One stored artifact with its identity and creation time (Unix millis).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub timestamp: i64,
    #[serde(flatten)]
    pub artifact: Artifact,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum Artifact {
    Prompt { prompt: String, subject: String, source: String },
    Image { image_data_url: String, prompt: String, settings: ImageSettings },
    /// `video_url` points at the written file; older entries carry a data URL.
    Video {
        #[serde(alias = "videoDataUrl")]
        video_url: String,
        prompt: String,
        source: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSettings {
    pub aspect_ratio: String,
    pub model: String,
}

impl Artifact {
    pub fn kind(&self) -> &'static str {
        match self {
            Artifact::Prompt { .. } => "prompt",
            Artifact::Image { .. } => "image",
            Artifact::Video { .. } => "video",
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            Artifact::Prompt { prompt, .. }
            | Artifact::Image { prompt, .. }
            | Artifact::Video { prompt, .. } => prompt,
        }
    }

    /// Subject to seed a fresh prompt state with when the artifact is reused.
    pub fn reuse_subject(&self) -> &str {
        match self {
            Artifact::Prompt { subject, .. } => subject,
            Artifact::Image { prompt, .. } | Artifact::Video { prompt, .. } => prompt,
        }
    }

    pub fn source(&self) -> &str {
        match self {
            Artifact::Prompt { source, .. } | Artifact::Video { source, .. } => source,
            Artifact::Image { .. } => "Image Generator",
        }
    }
}

impl HistoryEntry {
    pub fn new(artifact: Artifact) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().timestamp_millis(),
            artifact,
        }
    }
}

/// Put `entry` at the front and evict anything past [`HISTORY_LIMIT`].
pub fn push_entry(entries: &mut Vec<HistoryEntry>, entry: HistoryEntry) {
    entries.insert(0, entry);
    entries.truncate(HISTORY_LIMIT);
}

/// Remove the entry with `id`; returns whether anything was removed.
pub fn remove_entry(entries: &mut Vec<HistoryEntry>, id: &str) -> bool {
    let before = entries.len();
    entries.retain(|entry| entry.id != id);
    entries.len() != before
}
