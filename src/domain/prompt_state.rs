//! The editable prompt state and partial updates to it.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::domain::{Parameter, catalog};

/// Subject plus one chosen value per cinematic parameter.
///
/// Values are free text: the catalog only supplies defaults and suggestions,
/// so anything (including an empty string) is a valid value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptState {
    pub subject: String,
    pub shot_type: String,
    pub art_style: String,
    pub composition: String,
    pub camera_angle: String,
    pub camera_lens: String,
    pub camera_movement: String,
    pub lighting_style: String,
    pub time_of_day: String,
    pub weather: String,
    pub color_grade: String,
    pub render_style: String,
    pub film_stock: String,
    pub post_processing_effects: String,
}

impl Default for PromptState {
    fn default() -> Self {
        Self {
            subject: String::new(),
            shot_type: catalog::default_value(Parameter::ShotType).to_string(),
            art_style: catalog::default_value(Parameter::ArtStyle).to_string(),
            composition: catalog::default_value(Parameter::Composition).to_string(),
            camera_angle: catalog::default_value(Parameter::CameraAngle).to_string(),
            camera_lens: catalog::default_value(Parameter::CameraLens).to_string(),
            camera_movement: catalog::default_value(Parameter::CameraMovement).to_string(),
            lighting_style: catalog::default_value(Parameter::LightingStyle).to_string(),
            time_of_day: catalog::default_value(Parameter::TimeOfDay).to_string(),
            weather: catalog::default_value(Parameter::Weather).to_string(),
            color_grade: catalog::default_value(Parameter::ColorGrade).to_string(),
            render_style: catalog::default_value(Parameter::RenderStyle).to_string(),
            film_stock: catalog::default_value(Parameter::FilmStock).to_string(),
            post_processing_effects: catalog::default_value(Parameter::PostProcessingEffects)
                .to_string(),
        }
    }
}

impl PromptState {
    /// Default state carrying the given subject.
    pub fn with_subject(subject: impl Into<String>) -> Self {
        Self { subject: subject.into(), ..Self::default() }
    }

    pub fn get(&self, parameter: Parameter) -> &str {
        match parameter {
            Parameter::ShotType => &self.shot_type,
            Parameter::ArtStyle => &self.art_style,
            Parameter::Composition => &self.composition,
            Parameter::CameraAngle => &self.camera_angle,
            Parameter::CameraLens => &self.camera_lens,
            Parameter::CameraMovement => &self.camera_movement,
            Parameter::LightingStyle => &self.lighting_style,
            Parameter::TimeOfDay => &self.time_of_day,
            Parameter::Weather => &self.weather,
            Parameter::ColorGrade => &self.color_grade,
            Parameter::RenderStyle => &self.render_style,
            Parameter::FilmStock => &self.film_stock,
            Parameter::PostProcessingEffects => &self.post_processing_effects,
        }
    }

    fn slot_mut(&mut self, parameter: Parameter) -> &mut String {
        match parameter {
            Parameter::ShotType => &mut self.shot_type,
            Parameter::ArtStyle => &mut self.art_style,
            Parameter::Composition => &mut self.composition,
            Parameter::CameraAngle => &mut self.camera_angle,
            Parameter::CameraLens => &mut self.camera_lens,
            Parameter::CameraMovement => &mut self.camera_movement,
            Parameter::LightingStyle => &mut self.lighting_style,
            Parameter::TimeOfDay => &mut self.time_of_day,
            Parameter::Weather => &mut self.weather,
            Parameter::ColorGrade => &mut self.color_grade,
            Parameter::RenderStyle => &mut self.render_style,
            Parameter::FilmStock => &mut self.film_stock,
            Parameter::PostProcessingEffects => &mut self.post_processing_effects,
        }
    }

    pub fn set(&mut self, parameter: Parameter, value: impl Into<String>) {
        *self.slot_mut(parameter) = value.into();
    }

    /// Overwrite every field present in `patch`; absent fields are untouched.
    pub fn apply(&mut self, patch: &PromptPatch) {
        for parameter in Parameter::ALL {
            if let Some(value) = patch.get(parameter) {
                self.set(parameter, value);
            }
        }
    }

    /// Reset to defaults, keeping only `subject`.
    pub fn reuse(&mut self, subject: impl Into<String>) {
        *self = Self::with_subject(subject);
    }

    /// The thirteen parameter values keyed by field name, in declared order.
    pub fn settings(&self) -> Settings<'_> {
        Settings(self)
    }
}

/// Serializes as a flat map of the thirteen parameter values.
#[derive(Debug, Clone, Copy)]
pub struct Settings<'a>(&'a PromptState);

impl Settings<'_> {
    pub fn iter(&self) -> impl Iterator<Item = (Parameter, &str)> + '_ {
        Parameter::ALL.into_iter().map(move |parameter| (parameter, self.0.get(parameter)))
    }
}

impl Serialize for Settings<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Parameter::ALL.len()))?;
        for (parameter, value) in self.iter() {
            map.serialize_entry(parameter.field_name(), value)?;
        }
        map.end()
    }
}

/// Partial parameter update, as returned by the AI director.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PromptPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shot_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub art_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_angle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_lens: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_movement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lighting_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub film_stock: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_processing_effects: Option<String>,
}

impl PromptPatch {
    pub fn get(&self, parameter: Parameter) -> Option<&str> {
        let slot = match parameter {
            Parameter::ShotType => &self.shot_type,
            Parameter::ArtStyle => &self.art_style,
            Parameter::Composition => &self.composition,
            Parameter::CameraAngle => &self.camera_angle,
            Parameter::CameraLens => &self.camera_lens,
            Parameter::CameraMovement => &self.camera_movement,
            Parameter::LightingStyle => &self.lighting_style,
            Parameter::TimeOfDay => &self.time_of_day,
            Parameter::Weather => &self.weather,
            Parameter::ColorGrade => &self.color_grade,
            Parameter::RenderStyle => &self.render_style,
            Parameter::FilmStock => &self.film_stock,
            Parameter::PostProcessingEffects => &self.post_processing_effects,
        };
        slot.as_deref()
    }

    pub fn set(&mut self, parameter: Parameter, value: impl Into<String>) {
        let slot = match parameter {
            Parameter::ShotType => &mut self.shot_type,
            Parameter::ArtStyle => &mut self.art_style,
            Parameter::Composition => &mut self.composition,
            Parameter::CameraAngle => &mut self.camera_angle,
            Parameter::CameraLens => &mut self.camera_lens,
            Parameter::CameraMovement => &mut self.camera_movement,
            Parameter::LightingStyle => &mut self.lighting_style,
            Parameter::TimeOfDay => &mut self.time_of_day,
            Parameter::Weather => &mut self.weather,
            Parameter::ColorGrade => &mut self.color_grade,
            Parameter::RenderStyle => &mut self.render_style,
            Parameter::FilmStock => &mut self.film_stock,
            Parameter::PostProcessingEffects => &mut self.post_processing_effects,
        };
        *slot = Some(value.into());
    }

    pub fn is_empty(&self) -> bool {
        Parameter::ALL.into_iter().all(|parameter| self.get(parameter).is_none())
    }
}
