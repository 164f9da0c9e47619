//! Render extract: turns the live ripple set into an ordered draw list that
//! the canvas painter (or a JS host reading the packed buffer) consumes
//! verbatim.

use crate::domain::ripple::Ripple;

/// Stroke width of the primary ring.
pub const RING_WIDTH: f64 = 2.0;

/// Stroke width of the secondary click ring.
pub const SECONDARY_RING_WIDTH: f64 = 1.0;

/// The secondary ring sits at this fraction of the primary radius.
pub const SECONDARY_RING_SCALE: f32 = 0.6;

/// The secondary ring renders at this fraction of the ripple opacity.
pub const SECONDARY_RING_ALPHA: f32 = 0.5;

/// Gradient stop where the inner glow peaks (fraction of the radius).
pub const GLOW_PEAK_STOP: f32 = 0.8;

/// Glow peak alpha as a fraction of the ripple opacity.
pub const GLOW_PEAK_ALPHA: f32 = 0.3;

/// f32 lanes per packed draw entry: x, y, radius, opacity, secondary flag.
pub const DRAW_STRIDE: usize = 5;

/// One entry of the per-frame draw list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleDraw {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub opacity: f32,
    pub secondary_ring: bool,
}

pub fn extract(ripple: &Ripple) -> RippleDraw {
    RippleDraw {
        x: ripple.x,
        y: ripple.y,
        radius: ripple.radius,
        opacity: ripple.opacity,
        secondary_ring: ripple.secondary_ring(),
    }
}

/// Pack the draw list into a flat f32 transfer buffer for JS-side painters.
pub fn pack_draws(draws: &[RippleDraw], out: &mut Vec<f32>) {
    out.clear();
    out.reserve(draws.len() * DRAW_STRIDE);
    for draw in draws {
        out.extend_from_slice(&[
            draw.x,
            draw.y,
            draw.radius,
            draw.opacity,
            if draw.secondary_ring { 1.0 } else { 0.0 },
        ]);
    }
}
