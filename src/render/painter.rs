use std::time::Duration;

use crate::{
    animation::update::advance,
    foundation::{core::Surface, error::BlueboardResult},
    scene::{list::Scene, model::AnimationObject},
};

#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

/// Draws already-advanced objects onto a surface of the given extent.
pub trait Painter: Send {
    fn paint(&mut self, surface: Surface, objects: &[AnimationObject]) -> BlueboardResult<()>;
}

impl<P: Painter + ?Sized> Painter for Box<P> {
    fn paint(&mut self, surface: Surface, objects: &[AnimationObject]) -> BlueboardResult<()> {
        (**self).paint(surface, objects)
    }
}

/// Advances `scene` to `elapsed` and paints the result once.
pub fn render_scene_at(
    scene: &Scene,
    elapsed: Duration,
    surface: Surface,
    painter: &mut dyn Painter,
) -> BlueboardResult<()> {
    let objects = advance(scene.objects(), elapsed);
    painter.paint(surface, &objects)
}
