//! Movement spawn throttle: the distance + time gate that bounds ripple
//! creation during continuous pointer motion, independent of raw event
//! frequency.

use crate::domain::ripple::{Ripple, RippleKind};

/// Minimum travel (logical px) from the last spawn point before another
/// movement ripple may spawn.
pub const MOVE_MIN_DISTANCE: f32 = 10.0;

/// Minimum wall-clock gap between movement spawns.
pub const MOVE_MIN_INTERVAL_MS: f64 = 50.0;

/// Last-spawn bookkeeping for the movement gate.
///
/// Click spawns bypass the gate entirely and leave it untouched. The state
/// only advances when a spawn actually happens, so both gates stay armed
/// across rejected events.
#[derive(Debug, Clone)]
pub struct MoveThrottle {
    last_x: f32,
    last_y: f32,
    last_spawn_ms: Option<f64>,
}

impl MoveThrottle {
    pub fn new() -> Self {
        MoveThrottle {
            last_x: 0.0,
            last_y: 0.0,
            last_spawn_ms: None,
        }
    }

    /// Apply the movement spawn policy to one pointer-move event.
    /// Returns the spawned ripple when both gates pass.
    pub fn on_move(&mut self, x: f32, y: f32, now_ms: f64) -> Option<Ripple> {
        let dx = x - self.last_x;
        let dy = y - self.last_y;
        let far_enough = dx * dx + dy * dy > MOVE_MIN_DISTANCE * MOVE_MIN_DISTANCE;
        // The first qualifying move is never time-gated.
        let slow_enough = match self.last_spawn_ms {
            Some(t) => now_ms - t >= MOVE_MIN_INTERVAL_MS,
            None => true,
        };
        if !(far_enough && slow_enough) {
            return None;
        }

        self.last_x = x;
        self.last_y = y;
        self.last_spawn_ms = Some(now_ms);
        Some(Ripple::new(x, y, RippleKind::Movement))
    }

    pub fn reset(&mut self) {
        *self = MoveThrottle::new();
    }
}

impl Default for MoveThrottle {
    fn default() -> Self {
        Self::new()
    }
}
