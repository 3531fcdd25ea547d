use crate::{
    foundation::{core::HexColor, error::BlueboardResult},
    scene::model::{Animation, AnimationKind, AnimationObject, DEFAULT_DURATION_SECS, ShapeKind},
};

/// Body of the outbound generation call.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
    #[serde(default)]
    pub context: serde_json::Map<String, serde_json::Value>,
}

impl PromptRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            context: serde_json::Map::new(),
        }
    }
}

fn default_subject() -> String {
    "default".to_string()
}

fn default_animation_type() -> String {
    AnimationKind::Rotate.as_str().to_string()
}

fn default_complexity() -> String {
    "medium".to_string()
}

fn default_duration() -> f64 {
    DEFAULT_DURATION_SECS
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GenerationParameters {
    #[serde(default)]
    pub interactive: bool,
    #[serde(default = "default_complexity")]
    pub complexity: String,
    #[serde(default = "default_duration")]
    pub duration: f64, // seconds
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            interactive: false,
            complexity: default_complexity(),
            duration: default_duration(),
        }
    }
}

/// What the text-generation service says about a prompt.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Classification {
    pub generated_text: String,
    #[serde(default = "default_animation_type")]
    pub animation_type: String,
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default)]
    pub parameters: GenerationParameters,
}

/// Shape and colour drawn for a subject. Unknown subjects get the default cube.
pub fn shape_for_subject(subject: &str) -> (ShapeKind, &'static str) {
    match subject.trim().to_ascii_lowercase().as_str() {
        "physics" => (ShapeKind::Atom, "#E24A4A"),
        "biology" => (ShapeKind::Dna, "#E24A9D"),
        "chemistry" => (ShapeKind::Molecule, "#4AE2D5"),
        "math" => (ShapeKind::Pyramid, "#4A4AE2"),
        _ => (ShapeKind::Cube, "#4A90E2"),
    }
}

pub fn scale_for_complexity(complexity: &str) -> f64 {
    if complexity.trim().eq_ignore_ascii_case("high") {
        1.5
    } else {
        1.0
    }
}

impl Classification {
    pub fn animation(&self) -> Animation {
        let duration = self.parameters.duration;
        let duration = if duration.is_finite() && duration > 0.0 {
            duration
        } else {
            DEFAULT_DURATION_SECS
        };
        Animation::new(AnimationKind::from_label(&self.animation_type), duration)
    }

    /// A fresh object for this classification, at the scene origin.
    pub fn to_object(&self) -> BlueboardResult<AnimationObject> {
        let (kind, color) = shape_for_subject(&self.subject);
        Ok(AnimationObject::new(kind)
            .with_scale(scale_for_complexity(&self.parameters.complexity))
            .with_color(HexColor::parse(color)?)
            .with_animation(self.animation()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generate/classify.rs"]
mod tests;
