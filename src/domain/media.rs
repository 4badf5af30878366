use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, catalog};

/// Image generation model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ImageModel {
    #[default]
    #[serde(rename = "imagen-4.0-generate-001")]
    Imagen4,
    #[serde(rename = "gemini-2.5-flash-image-preview")]
    FlashImagePreview,
}

impl ImageModel {
    pub const ALL: [ImageModel; 2] = [ImageModel::Imagen4, ImageModel::FlashImagePreview];

    pub fn id(&self) -> &'static str {
        match self {
            ImageModel::Imagen4 => "imagen-4.0-generate-001",
            ImageModel::FlashImagePreview => "gemini-2.5-flash-image-preview",
        }
    }

    /// Only Imagen accepts an aspect ratio; the preview model ignores it.
    pub fn honours_aspect_ratio(&self) -> bool {
        matches!(self, ImageModel::Imagen4)
    }
}

impl fmt::Display for ImageModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ImageModel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImageModel::ALL
            .into_iter()
            .find(|model| model.id() == s)
            .ok_or_else(|| AppError::InvalidImageModel(s.to_string()))
    }
}

/// Check `value` against the catalog's aspect ratios.
pub fn validate_aspect_ratio(value: &str) -> Result<(), AppError> {
    if catalog::is_aspect_ratio(value) {
        return Ok(());
    }
    let available: Vec<&str> = catalog::ASPECT_RATIO_OPTIONS.iter().map(|o| o.value).collect();
    Err(AppError::InvalidAspectRatio { value: value.to_string(), available: available.join(", ") })
}
