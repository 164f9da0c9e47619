use crate::domain::ripple::{Ripple, RippleKind};

use super::EngineCore;

pub(super) fn pointer_move(core: &mut EngineCore, x: f32, y: f32, now_ms: f64) -> bool {
    match core.throttle.on_move(x, y, now_ms) {
        Some(ripple) => {
            core.ripples.push(ripple);
            core.spawned_move += 1;
            true
        }
        None => false,
    }
}

/// Click spawns are never throttled and leave the movement gate untouched.
pub(super) fn pointer_click(core: &mut EngineCore, x: f32, y: f32) {
    core.ripples.push(Ripple::new(x, y, RippleKind::Click));
    core.spawned_click += 1;
}

/// The surface tracks the viewport; live ripples keep their absolute
/// coordinates across a resize.
pub(super) fn resize(core: &mut EngineCore, width: u32, height: u32) {
    core.width = width;
    core.height = height;
}

pub(super) fn clear(core: &mut EngineCore) {
    core.ripples.clear();
    core.draw_list.clear();
    core.throttle.reset();
    core.frame = 0;
    core.spawned_move = 0;
    core.spawned_click = 0;
}
