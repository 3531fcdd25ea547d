use crate::foundation::{
    core::{HexColor, Transform2D, Vec2},
    error::{BlueboardError, BlueboardResult},
};

/// Closed set of drawable shape kinds. Serialized lowercase (`"sphere"`, `"dna"`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Sphere,
    Cube,
    Cone,
    Dna,
    Molecule,
    Atom,
    Pyramid,
    Torus,
}

impl ShapeKind {
    pub const ALL: [Self; 8] = [
        Self::Sphere,
        Self::Cube,
        Self::Cone,
        Self::Dna,
        Self::Molecule,
        Self::Atom,
        Self::Pyramid,
        Self::Torus,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::Cube => "cube",
            Self::Cone => "cone",
            Self::Dna => "dna",
            Self::Molecule => "molecule",
            Self::Atom => "atom",
            Self::Pyramid => "pyramid",
            Self::Torus => "torus",
        }
    }
}

/// Which time-varying field the update function recomputes.
///
/// Decoding is lenient: any label other than `bounce` or `scale` becomes `Rotate`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum AnimationKind {
    Rotate,
    Bounce,
    Scale,
}

impl AnimationKind {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "bounce" => Self::Bounce,
            "scale" => Self::Scale,
            _ => Self::Rotate,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rotate => "rotate",
            Self::Bounce => "bounce",
            Self::Scale => "scale",
        }
    }
}

impl From<String> for AnimationKind {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<AnimationKind> for &'static str {
    fn from(value: AnimationKind) -> Self {
        value.as_str()
    }
}

pub const DEFAULT_DURATION_SECS: f64 = 2.0;

fn default_duration() -> f64 {
    DEFAULT_DURATION_SECS
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Animation {
    /// `None` selects the combined pulse-and-spin policy.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<AnimationKind>,
    #[serde(default = "default_duration")]
    pub duration: f64, // seconds, > 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>, // seconds, >= 0
}

impl Animation {
    pub fn new(kind: AnimationKind, duration: f64) -> Self {
        Self {
            kind: Some(kind),
            duration,
            delay: None,
        }
    }

    pub fn validate(&self) -> BlueboardResult<()> {
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(BlueboardError::validation(
                "animation duration must be a finite number > 0",
            ));
        }
        if let Some(delay) = self.delay
            && !(delay.is_finite() && delay >= 0.0)
        {
            return Err(BlueboardError::validation(
                "animation delay must be a finite number >= 0",
            ));
        }
        Ok(())
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(AnimationKind::Rotate, DEFAULT_DURATION_SECS)
    }
}

pub fn new_object_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

fn default_scale() -> f64 {
    1.0
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationObject {
    #[serde(default = "new_object_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>, // kept for 3D-origin records, not drawn
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default)]
    pub rotation: f64, // radians
    #[serde(default)]
    pub color: HexColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
}

impl AnimationObject {
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            id: new_object_id(),
            kind,
            x: 0.0,
            y: 0.0,
            z: None,
            scale: 1.0,
            rotation: 0.0,
            color: HexColor::default(),
            animation: None,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_color(mut self, color: HexColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = Some(animation);
        self
    }

    /// The animation actually played: objects without one spin once every two seconds.
    pub fn effective_animation(&self) -> Animation {
        self.animation.unwrap_or_default()
    }

    pub fn transform(&self) -> Transform2D {
        Transform2D {
            translate: Vec2::new(self.x, self.y),
            rotation_rad: self.rotation,
            scale: self.scale,
        }
    }

    pub fn validate(&self) -> BlueboardResult<()> {
        if self.id.trim().is_empty() {
            return Err(BlueboardError::validation("object id must be non-empty"));
        }
        let coords_finite = self.x.is_finite()
            && self.y.is_finite()
            && self.z.is_none_or(f64::is_finite)
            && self.rotation.is_finite();
        if !coords_finite {
            return Err(BlueboardError::validation(format!(
                "object '{}' has non-finite placement",
                self.id
            )));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(BlueboardError::validation(format!(
                "object '{}' scale must be > 0",
                self.id
            )));
        }
        if let Some(animation) = &self.animation {
            animation.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
