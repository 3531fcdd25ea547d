use std::fmt;

use crate::foundation::error::{BlueboardError, BlueboardResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Horizontal padding the canvas container keeps around the drawing surface.
pub const CONTAINER_PADDING_PX: u32 = 32;

/// Surface height per unit of container width (16:9).
pub const ASPECT_RATIO: f64 = 9.0 / 16.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> BlueboardResult<Self> {
        if width == 0 || height == 0 {
            return Err(BlueboardError::validation(
                "surface width/height must be > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Drawing extents for a container of the given width. Never degenerates below 1x1.
    pub fn for_container(container_width: u32) -> Self {
        let width = container_width.saturating_sub(CONTAINER_PADDING_PX).max(1);
        let height = ((f64::from(container_width) * ASPECT_RATIO).round() as u32).max(1);
        Self { width, height }
    }

    /// Pixels per scene unit. The visible scene is ten units tall.
    pub fn pixels_per_unit(self) -> f64 {
        f64::from(self.height) / 10.0
    }

    /// Maps scene space (origin at the centre, +y up) to pixel space.
    pub fn scene_to_pixels(self) -> Affine {
        let ppu = self.pixels_per_unit();
        Affine::translate(Vec2::new(
            f64::from(self.width) / 2.0,
            f64::from(self.height) / 2.0,
        )) * Affine::scale_non_uniform(ppu, -ppu)
    }
}

/// Straight (non-premultiplied) RGBA8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    pub fn premultiplied(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }
}

/// A colour style token written as `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
///
/// The token is kept as written so records round-trip unchanged; the parsed
/// channels are available through [`HexColor::rgba`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    token: String,
    rgba: Rgba8,
}

impl HexColor {
    pub fn parse(token: &str) -> BlueboardResult<Self> {
        let digits = token
            .strip_prefix('#')
            .ok_or_else(|| BlueboardError::validation(format!("color '{token}' must start with '#'")))?;

        let nibble = |c: u8| -> BlueboardResult<u8> {
            (c as char)
                .to_digit(16)
                .map(|d| d as u8)
                .ok_or_else(|| BlueboardError::validation(format!("color '{token}' is not hex")))
        };
        let byte = |i: usize| -> BlueboardResult<u8> {
            let b = digits.as_bytes();
            Ok(nibble(b[i])? << 4 | nibble(b[i + 1])?)
        };

        let rgba = match digits.len() {
            3 => {
                let b = digits.as_bytes();
                let expand = |c: u8| -> BlueboardResult<u8> { Ok(nibble(c)? * 17) };
                Rgba8 {
                    r: expand(b[0])?,
                    g: expand(b[1])?,
                    b: expand(b[2])?,
                    a: 255,
                }
            }
            6 => Rgba8 {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: 255,
            },
            8 => Rgba8 {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: byte(6)?,
            },
            _ => {
                return Err(BlueboardError::validation(format!(
                    "color '{token}' must have 3, 6 or 8 hex digits"
                )));
            }
        };

        Ok(Self {
            token: token.to_string(),
            rgba,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }

    pub fn rgba(&self) -> Rgba8 {
        self.rgba
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self {
            token: "#000000".to_string(),
            rgba: Rgba8 {
                r: 0,
                g: 0,
                b: 0,
                a: 255,
            },
        }
    }
}

impl TryFrom<String> for HexColor {
    type Error = BlueboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.token
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

/// Placement of a shape in scene space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    pub translate: Vec2,
    pub rotation_rad: f64,
    pub scale: f64,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            rotation_rad: 0.0,
            scale: 1.0,
        }
    }
}

impl Transform2D {
    pub fn to_affine(self) -> Affine {
        // T(translate) * R(rot) * S(scale)
        Affine::translate(self.translate)
            * Affine::rotate(self.rotation_rad)
            * Affine::scale(self.scale)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
