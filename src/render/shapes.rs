//! Flat glyphs for each [`ShapeKind`], in object-local scene units.
//!
//! Every glyph fits roughly inside the unit circle so `scale` reads as a radius.
//! Parts are listed back to front.

use kurbo::{Circle, Ellipse, Shape as _};

use crate::{
    foundation::core::{BezPath, Point, Rgba8, Vec2},
    scene::model::ShapeKind,
};

const TOLERANCE: f64 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Base,
    Light,
    Dark,
}

impl Tone {
    pub fn apply(self, c: Rgba8) -> Rgba8 {
        fn mix(from: u8, to: u8, t: f64) -> u8 {
            let from = f64::from(from);
            let to = f64::from(to);
            (from + (to - from) * t).round().clamp(0.0, 255.0) as u8
        }

        match self {
            Self::Base => c,
            Self::Light => Rgba8 {
                r: mix(c.r, 255, 0.35),
                g: mix(c.g, 255, 0.35),
                b: mix(c.b, 255, 0.35),
                a: c.a,
            },
            Self::Dark => Rgba8 {
                r: mix(c.r, 0, 0.3),
                g: mix(c.g, 0, 0.3),
                b: mix(c.b, 0, 0.3),
                a: c.a,
            },
        }
    }
}

#[derive(Clone, Debug)]
pub struct GlyphPart {
    pub path: BezPath,
    pub tone: Tone,
}

fn part(path: BezPath, tone: Tone) -> GlyphPart {
    GlyphPart { path, tone }
}

pub fn glyph(kind: ShapeKind) -> Vec<GlyphPart> {
    match kind {
        ShapeKind::Sphere => vec![
            part(circle(0.0, 0.0, 1.0), Tone::Base),
            part(circle(-0.35, 0.35, 0.3), Tone::Light),
        ],
        ShapeKind::Cube => vec![
            part(
                polygon(&[(-0.75, 0.45), (0.45, 0.45), (0.75, 0.75), (-0.45, 0.75)]),
                Tone::Light,
            ),
            part(
                polygon(&[(0.45, -0.75), (0.75, -0.45), (0.75, 0.75), (0.45, 0.45)]),
                Tone::Dark,
            ),
            part(
                polygon(&[(-0.75, -0.75), (0.45, -0.75), (0.45, 0.45), (-0.75, 0.45)]),
                Tone::Base,
            ),
        ],
        ShapeKind::Cone => vec![
            part(polygon(&[(0.0, 1.0), (-0.8, -0.6), (0.8, -0.6)]), Tone::Base),
            part(ellipse(0.0, -0.6, 0.8, 0.2, 0.0), Tone::Dark),
        ],
        ShapeKind::Pyramid => vec![
            part(polygon(&[(0.0, 1.0), (-0.9, -0.7), (0.1, -0.9)]), Tone::Base),
            part(polygon(&[(0.0, 1.0), (0.1, -0.9), (0.9, -0.6)]), Tone::Dark),
        ],
        ShapeKind::Torus => vec![part(
            annulus(circle(0.0, 0.0, 1.0), circle(0.0, 0.0, 0.45)),
            Tone::Base,
        )],
        ShapeKind::Atom => {
            let mut parts: Vec<GlyphPart> = (0..3)
                .map(|i| {
                    let rot = f64::from(i) * std::f64::consts::FRAC_PI_3;
                    let outer = ellipse(0.0, 0.0, 1.0, 0.35, rot);
                    let inner = ellipse(0.0, 0.0, 0.92, 0.28, rot);
                    part(annulus(outer, inner), Tone::Dark)
                })
                .collect();
            parts.push(part(circle(0.0, 0.0, 0.25), Tone::Base));
            parts
        }
        ShapeKind::Molecule => vec![
            part(bar((0.0, 0.0), (0.75, 0.45), 0.12), Tone::Dark),
            part(bar((0.0, 0.0), (-0.7, -0.4), 0.12), Tone::Dark),
            part(circle(0.75, 0.45, 0.3), Tone::Light),
            part(circle(-0.7, -0.4, 0.3), Tone::Light),
            part(circle(0.0, 0.0, 0.4), Tone::Base),
        ],
        ShapeKind::Dna => dna(),
    }
}

fn dna() -> Vec<GlyphPart> {
    const STEPS: u32 = 9;
    let mut rungs = Vec::new();
    let mut beads = Vec::new();
    for i in 0..STEPS {
        let t = f64::from(i) / f64::from(STEPS - 1);
        let y = -1.0 + 2.0 * t;
        let x = 0.5 * (t * std::f64::consts::TAU).sin();
        rungs.push(part(bar((-x, y), (x, y), 0.06), Tone::Light));
        beads.push(part(circle(x, y, 0.12), Tone::Base));
        beads.push(part(circle(-x, y, 0.12), Tone::Dark));
    }
    rungs.extend(beads);
    rungs
}

fn circle(cx: f64, cy: f64, r: f64) -> BezPath {
    Circle::new(Point::new(cx, cy), r).to_path(TOLERANCE)
}

fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64, rotation: f64) -> BezPath {
    Ellipse::new(Point::new(cx, cy), Vec2::new(rx, ry), rotation).to_path(TOLERANCE)
}

fn polygon(points: &[(f64, f64)]) -> BezPath {
    let mut path = BezPath::new();
    for (i, &(x, y)) in points.iter().enumerate() {
        if i == 0 {
            path.move_to((x, y));
        } else {
            path.line_to((x, y));
        }
    }
    path.close_path();
    path
}

/// A ring: `outer` with `inner` cut out (opposite winding under the non-zero rule).
fn annulus(outer: BezPath, inner: BezPath) -> BezPath {
    let mut path = outer;
    path.extend(inner.reverse_subpaths().elements().iter().copied());
    path
}

/// A straight bond of the given width between two points.
fn bar(from: (f64, f64), to: (f64, f64), width: f64) -> BezPath {
    let a = Vec2::new(from.0, from.1);
    let b = Vec2::new(to.0, to.1);
    let dir = b - a;
    let len = dir.hypot();
    if len == 0.0 {
        return BezPath::new();
    }
    let n = Vec2::new(-dir.y, dir.x) * (width / 2.0 / len);
    polygon(&[
        ((a + n).x, (a + n).y),
        ((b + n).x, (b + n).y),
        ((b - n).x, (b - n).y),
        ((a - n).x, (a - n).y),
    ])
}

#[cfg(test)]
#[path = "../../tests/unit/render/shapes.rs"]
mod tests;
