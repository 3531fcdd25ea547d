use crate::{
    foundation::{
        core::{Affine, BezPath, Point, Rgba8, Surface},
        error::{BlueboardError, BlueboardResult},
    },
    render::{
        painter::{FrameRGBA, Painter},
        shapes::glyph,
    },
    scene::model::AnimationObject,
};

#[derive(Clone, Debug)]
pub struct CpuPainterSettings {
    pub clear: Rgba8,
}

impl Default for CpuPainterSettings {
    fn default() -> Self {
        Self {
            clear: Rgba8::WHITE,
        }
    }
}

/// Rasterizes scenes with `vello_cpu`. The latest frame is kept for readback.
pub struct CpuPainter {
    settings: CpuPainterSettings,
    last_frame: Option<FrameRGBA>,
    frames_painted: u64,
}

impl CpuPainter {
    pub fn new(settings: CpuPainterSettings) -> Self {
        Self {
            settings,
            last_frame: None,
            frames_painted: 0,
        }
    }

    pub fn last_frame(&self) -> Option<&FrameRGBA> {
        self.last_frame.as_ref()
    }

    pub fn take_frame(&mut self) -> Option<FrameRGBA> {
        self.last_frame.take()
    }

    pub fn frames_painted(&self) -> u64 {
        self.frames_painted
    }
}

impl Default for CpuPainter {
    fn default() -> Self {
        Self::new(CpuPainterSettings::default())
    }
}

impl Painter for CpuPainter {
    fn paint(&mut self, surface: Surface, objects: &[AnimationObject]) -> BlueboardResult<()> {
        let width: u16 = surface
            .width
            .try_into()
            .map_err(|_| BlueboardError::render("surface width exceeds u16"))?;
        let height: u16 = surface
            .height
            .try_into()
            .map_err(|_| BlueboardError::render("surface height exceeds u16"))?;

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        let mut ctx = vello_cpu::RenderContext::new(width, height);

        let clear = self.settings.clear;
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            clear.r, clear.g, clear.b, clear.a,
        ));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        ));

        let view = surface.scene_to_pixels();
        for obj in objects {
            let transform = view * obj.transform().to_affine();
            let base = obj.color.rgba();
            ctx.set_transform(affine_to_cpu(transform));
            for part in glyph(obj.kind) {
                let c = part.tone.apply(base);
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
                ctx.fill_path(&bezpath_to_cpu(&part.path));
            }
        }

        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        self.frames_painted += 1;
        self.last_frame = Some(FrameRGBA {
            width: surface.width,
            height: surface.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        });
        tracing::trace!(
            frame = self.frames_painted,
            objects = objects.len(),
            "painted frame"
        );
        Ok(())
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
