//! Engine core: the owned per-mount state plus the per-frame step.
//!
//! The core only orchestrates and delegates:
//! - Movement gate in systems/spawn.rs, draw-list extract in
//!   systems/render.rs
//! - Event handlers only append (commands/); ripples are mutated solely
//!   inside `step`, which also rebuilds the draw list

use crate::domain::ripple::Ripple;
use crate::domain::theme::Theme;
use crate::systems::render::RippleDraw;
use crate::systems::spawn::MoveThrottle;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::RippleEngine;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The engine state for one mounted overlay surface.
pub struct EngineCore {
    theme: Theme,
    ripples: Vec<Ripple>,
    throttle: MoveThrottle,

    // Surface
    width: u32,
    height: u32,

    // State
    frame: u64,

    // Render extract output, rebuilt every step
    draw_list: Vec<RippleDraw>,
    draw_transfer: Vec<f32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
    spawned_move: u32,
    spawned_click: u32,
}

impl EngineCore {
    /// Create an engine for a surface of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        init::create_engine_core(width, height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn ripple_count(&self) -> usize {
        self.ripples.len()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn load_theme_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_theme_json(self, json)
    }

    pub fn theme_manifest_json(&self) -> String {
        settings::theme_manifest_json(self)
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Feed one pointer-move event; returns true when a movement ripple
    /// spawned (both throttle gates passed).
    pub fn pointer_move(&mut self, x: f32, y: f32, now_ms: f64) -> bool {
        commands::pointer_move(self, x, y, now_ms)
    }

    /// Feed one click event. Always spawns exactly one click ripple.
    pub fn pointer_click(&mut self, x: f32, y: f32) {
        commands::pointer_click(self, x, y)
    }

    /// Track a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        commands::resize(self, width, height)
    }

    /// Drop all live ripples and reset the movement gate.
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Advance one display frame: grow, fade, retire, extract.
    pub fn step(&mut self) {
        step::step(self);
    }

    /// The draw list extracted by the last `step`, in creation order.
    pub fn draw_list(&self) -> &[RippleDraw] {
        &self.draw_list
    }

    /// Pack the draw list into the transfer buffer and return its pointer
    /// (for JS-side painters reading wasm memory).
    pub fn pack_draws(&mut self) -> *const f32 {
        crate::systems::render::pack_draws(&self.draw_list, &mut self.draw_transfer);
        self.draw_transfer.as_ptr()
    }

    pub fn draw_count(&self) -> usize {
        self.draw_list.len()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
