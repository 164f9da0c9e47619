use crate::systems::render;

use super::{EngineCore, PerfTimer};

pub(super) fn step(core: &mut EngineCore) {
    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
        // Spawns are counted by the event handlers between steps.
        core.perf_stats.spawned_move = core.spawned_move;
        core.perf_stats.spawned_click = core.spawned_click;
    }
    core.spawned_move = 0;
    core.spawned_click = 0;

    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };
    let before = core.ripples.len();

    // Advance, retire, and extract in a single ordered pass. Creation order
    // is preserved so the painter layers older ripples first. A ripple that
    // fades this frame is dropped without being drawn.
    let EngineCore {
        ripples, draw_list, ..
    } = core;
    draw_list.clear();
    ripples.retain_mut(|ripple| {
        if !ripple.advance() {
            return false;
        }
        draw_list.push(render::extract(ripple));
        true
    });

    core.frame += 1;

    if let Some(timer) = step_start {
        core.perf_stats.step_ms = timer.elapsed_ms();
        core.perf_stats.retired = (before - core.ripples.len()) as u32;
        core.perf_stats.live_ripples = core.ripples.len() as u32;
        core.perf_stats.draw_calls = core.draw_list.len() as u32;
    }
}
