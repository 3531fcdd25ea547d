use crate::{
    foundation::{core::HexColor, error::BlueboardResult},
    scene::model::{Animation, AnimationKind, AnimationObject, ShapeKind},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub category: &'static str,
    pub kind: ShapeKind,
    pub scale: f64,
    pub color: &'static str,
    pub animation: Option<(AnimationKind, f64)>,
}

impl Preset {
    /// A new object for this preset, placed at the scene origin.
    pub fn create(&self) -> BlueboardResult<AnimationObject> {
        let mut obj = AnimationObject::new(self.kind)
            .with_scale(self.scale)
            .with_color(HexColor::parse(self.color)?);
        if let Some((kind, duration)) = self.animation {
            obj = obj.with_animation(Animation::new(kind, duration));
        }
        Ok(obj)
    }
}

static PRESETS: [Preset; 9] = [
    Preset {
        name: "Cube",
        category: "basic",
        kind: ShapeKind::Cube,
        scale: 1.0,
        color: "#4A90E2",
        animation: None,
    },
    Preset {
        name: "Sphere",
        category: "basic",
        kind: ShapeKind::Sphere,
        scale: 1.0,
        color: "#E24A77",
        animation: None,
    },
    Preset {
        name: "Cone",
        category: "basic",
        kind: ShapeKind::Cone,
        scale: 1.0,
        color: "#50E24A",
        animation: None,
    },
    Preset {
        name: "Cell",
        category: "biology",
        kind: ShapeKind::Sphere,
        scale: 1.2,
        color: "#7FE24A",
        animation: Some((AnimationKind::Scale, 3.0)),
    },
    Preset {
        name: "DNA",
        category: "biology",
        kind: ShapeKind::Dna,
        scale: 1.0,
        color: "#E24A9D",
        animation: Some((AnimationKind::Rotate, 4.0)),
    },
    Preset {
        name: "Molecule",
        category: "chemistry",
        kind: ShapeKind::Molecule,
        scale: 0.8,
        color: "#4AE2D5",
        animation: Some((AnimationKind::Bounce, 2.0)),
    },
    Preset {
        name: "Atom",
        category: "chemistry",
        kind: ShapeKind::Atom,
        scale: 1.0,
        color: "#E24A4A",
        animation: Some((AnimationKind::Rotate, 3.0)),
    },
    Preset {
        name: "Pyramid",
        category: "math",
        kind: ShapeKind::Pyramid,
        scale: 1.0,
        color: "#4A4AE2",
        animation: Some((AnimationKind::Rotate, 3.0)),
    },
    Preset {
        name: "Torus",
        category: "math",
        kind: ShapeKind::Torus,
        scale: 1.0,
        color: "#E2CF4A",
        animation: Some((AnimationKind::Rotate, 4.0)),
    },
];

pub fn presets() -> &'static [Preset] {
    &PRESETS
}

/// Categories in first-seen order.
pub fn categories() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for p in &PRESETS {
        if !out.contains(&p.category) {
            out.push(p.category);
        }
    }
    out
}

pub fn preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/library.rs"]
mod tests;
