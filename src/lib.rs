//! Blueboard is an interactive teaching canvas: animated shapes driven by plain-language prompts.
//!
//! A prompt goes to a text-generation service, the classification picks a shape, colour, and
//! animation, and the new object joins the scene. A render loop advances every object each frame
//! and paints it with a CPU rasterizer. Scenes are saved as content records and shared live
//! between clients in the same room.
//!
//! # Pipeline overview
//!
//! 1. **Classify**: `prompt -> Classification` (remote service or the built-in rules)
//! 2. **Build**: `Classification -> AnimationObject`, appended to a `Scene`
//! 3. **Advance**: `Scene + elapsed -> Vec<AnimationObject>` (pure, per object)
//! 4. **Paint**: `objects -> FrameRGBA` through a [`Painter`]
//!
//! The HTTP surface ([`router`]) persists scenes in a [`MemoryStore`] and fans updates out
//! through a [`RoomHub`].
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod generate;
mod render;
mod scene;
mod server;
mod store;

pub use animation::update::{
    BOUNCE_AMPLITUDE, PULSE_AMPLITUDE, SCALE_AMPLITUDE, advance, progress_at, update,
};
pub use foundation::core::{
    ASPECT_RATIO, Affine, BezPath, CONTAINER_PADDING_PX, HexColor, Point, Rect, Rgba8, Surface,
    Transform2D, Vec2,
};
pub use foundation::error::{BlueboardError, BlueboardResult};
pub use generate::classify::{
    Classification, GenerationParameters, PromptRequest, scale_for_complexity, shape_for_subject,
};
pub use generate::client::{DEFAULT_TIMEOUT as DEFAULT_AI_TIMEOUT, Generator, HttpTextGenerator};
pub use generate::pipeline::{PromptOutcome, submit_prompt};
pub use generate::rules::RuleBasedGenerator;
pub use render::cpu::{CpuPainter, CpuPainterSettings};
pub use render::painter::{FrameRGBA, Painter, render_scene_at};
pub use render::player::{
    DEFAULT_FRAME_INTERVAL, FrameOutcome, Player, PlayerHandle, spawn_player,
};
pub use render::shapes::{GlyphPart, Tone, glyph};
pub use scene::library::{Preset, categories, preset, presets};
pub use scene::list::Scene;
pub use scene::model::{
    Animation, AnimationKind, AnimationObject, DEFAULT_DURATION_SECS, ShapeKind, new_object_id,
};
pub use server::ai_service::{Health, router as ai_service_router};
pub use server::config::{
    AiServiceArgs, DEFAULT_AI_SERVICE_PORT, DEFAULT_MAX_PORT_ATTEMPTS, DEFAULT_PORT, ServeArgs,
};
pub use server::error::{ApiError, ApiResult, ErrorBody};
pub use server::listen::bind_with_retry;
pub use server::rooms::{
    AnimationUpdate, ClientEvent, ClientId, NewAnimation, RoomHub, ServerEvent,
};
pub use server::routes::{default_title, router};
pub use server::state::AppState;
pub use server::ws::handle_frame as handle_ws_frame;
pub use server::{serve, serve_ai};
pub use store::memory::MemoryStore;
pub use store::records::{
    AnimationConfig, ContentRecord, NewContent, NewProgress, ProgressRecord, ProgressWithContent,
};
