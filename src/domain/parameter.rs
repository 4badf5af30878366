use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// The cinematic choice slots carried by a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Parameter {
    ShotType,
    ArtStyle,
    Composition,
    CameraAngle,
    CameraLens,
    CameraMovement,
    LightingStyle,
    TimeOfDay,
    Weather,
    ColorGrade,
    RenderStyle,
    FilmStock,
    PostProcessingEffects,
}

impl Parameter {
    /// All parameters in prompt-state declaration order.
    pub const ALL: [Parameter; 13] = [
        Parameter::ShotType,
        Parameter::ArtStyle,
        Parameter::Composition,
        Parameter::CameraAngle,
        Parameter::CameraLens,
        Parameter::CameraMovement,
        Parameter::LightingStyle,
        Parameter::TimeOfDay,
        Parameter::Weather,
        Parameter::ColorGrade,
        Parameter::RenderStyle,
        Parameter::FilmStock,
        Parameter::PostProcessingEffects,
    ];

    /// camelCase field name used by the structured encodings.
    pub fn field_name(&self) -> &'static str {
        match self {
            Parameter::ShotType => "shotType",
            Parameter::ArtStyle => "artStyle",
            Parameter::Composition => "composition",
            Parameter::CameraAngle => "cameraAngle",
            Parameter::CameraLens => "cameraLens",
            Parameter::CameraMovement => "cameraMovement",
            Parameter::LightingStyle => "lightingStyle",
            Parameter::TimeOfDay => "timeOfDay",
            Parameter::Weather => "weather",
            Parameter::ColorGrade => "colorGrade",
            Parameter::RenderStyle => "renderStyle",
            Parameter::FilmStock => "filmStock",
            Parameter::PostProcessingEffects => "postProcessingEffects",
        }
    }

    /// kebab-case name used on the command line.
    pub fn flag_name(&self) -> &'static str {
        match self {
            Parameter::ShotType => "shot-type",
            Parameter::ArtStyle => "art-style",
            Parameter::Composition => "composition",
            Parameter::CameraAngle => "camera-angle",
            Parameter::CameraLens => "camera-lens",
            Parameter::CameraMovement => "camera-movement",
            Parameter::LightingStyle => "lighting-style",
            Parameter::TimeOfDay => "time-of-day",
            Parameter::Weather => "weather",
            Parameter::ColorGrade => "color-grade",
            Parameter::RenderStyle => "render-style",
            Parameter::FilmStock => "film-stock",
            Parameter::PostProcessingEffects => "post-processing-effects",
        }
    }

    /// Human-readable display name.
    pub fn label(&self) -> &'static str {
        match self {
            Parameter::ShotType => "Shot Type",
            Parameter::ArtStyle => "Art Style",
            Parameter::Composition => "Composition",
            Parameter::CameraAngle => "Camera Angle",
            Parameter::CameraLens => "Camera Lens",
            Parameter::CameraMovement => "Camera Movement",
            Parameter::LightingStyle => "Lighting Style",
            Parameter::TimeOfDay => "Time of Day",
            Parameter::Weather => "Weather",
            Parameter::ColorGrade => "Color Grade",
            Parameter::RenderStyle => "Render Style",
            Parameter::FilmStock => "Film Stock",
            Parameter::PostProcessingEffects => "Post-Processing",
        }
    }

    /// XML element name: the field name with its first character upper-cased.
    pub fn xml_tag(&self) -> String {
        to_pascal_case(self.field_name())
    }

    /// Parse a parameter from its field name, flag name, or snake_case name.
    pub fn from_name(name: &str) -> Option<Parameter> {
        let normalized: String =
            name.chars().filter(|c| *c != '-' && *c != '_').collect::<String>().to_lowercase();
        Parameter::ALL
            .into_iter()
            .find(|parameter| parameter.field_name().to_lowercase() == normalized)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

impl FromStr for Parameter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parameter::from_name(s).ok_or_else(|| AppError::UnknownParameter(s.to_string()))
    }
}

/// Upper-case the first character and keep the remaining camelCase humps.
pub fn to_pascal_case(identifier: &str) -> String {
    let mut chars = identifier.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
