use std::{f64::consts::TAU, time::Duration};

use crate::scene::model::{Animation, AnimationKind, AnimationObject};

/// Amplitude of the `bounce` policy, in scene units.
pub const BOUNCE_AMPLITUDE: f64 = 2.0;
/// Relative amplitude of the `scale` policy.
pub const SCALE_AMPLITUDE: f64 = 0.3;
/// Relative amplitude of the untyped pulse-and-spin policy.
pub const PULSE_AMPLITUDE: f64 = 0.2;

/// Returns a copy of `obj` with its time-dependent field recomputed for `progress`.
///
/// `progress` is the phase within one cycle. Values outside `[0, 1)` are accepted;
/// every policy is periodic in it.
pub fn update(obj: &AnimationObject, progress: f64) -> AnimationObject {
    let phase = progress * TAU;
    let mut next = obj.clone();

    match obj.effective_animation().kind {
        Some(AnimationKind::Rotate) => {
            next.rotation = phase;
        }
        Some(AnimationKind::Bounce) => {
            next.y = phase.sin() * BOUNCE_AMPLITUDE;
        }
        Some(AnimationKind::Scale) => {
            next.scale = 1.0 + phase.sin() * SCALE_AMPLITUDE;
        }
        None => {
            next.scale = 1.0 + phase.sin() * PULSE_AMPLITUDE;
            next.rotation = phase;
        }
    }

    next
}

/// Phase of `animation` after `elapsed` wall-clock time, always in `[0, 1)`.
///
/// Before the optional delay has passed the phase stays at 0.
pub fn progress_at(animation: &Animation, elapsed: Duration) -> f64 {
    let period_ms = animation.duration * 1000.0;
    if !(period_ms.is_finite() && period_ms > 0.0) {
        return 0.0;
    }

    let delay_ms = animation.delay.unwrap_or(0.0).max(0.0) * 1000.0;
    let local_ms = elapsed.as_secs_f64() * 1000.0 - delay_ms;
    if local_ms <= 0.0 {
        return 0.0;
    }

    let p = (local_ms / period_ms).rem_euclid(1.0);
    // Rounding in rem_euclid can land exactly on 1.0.
    if p >= 1.0 { 0.0 } else { p }
}

/// Advances every object to its own phase at `elapsed`.
#[tracing::instrument(level = "trace", skip(objects), fields(count = objects.len()))]
pub fn advance(objects: &[AnimationObject], elapsed: Duration) -> Vec<AnimationObject> {
    objects
        .iter()
        .map(|obj| {
            let progress = progress_at(&obj.effective_animation(), elapsed);
            update(obj, progress)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/update.rs"]
mod tests;
