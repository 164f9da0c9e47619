use wasm_bindgen::prelude::*;

use crate::systems::render::DRAW_STRIDE;

use super::perf_stats::PerfStats;
use super::EngineCore;

/// WASM-facing engine handle: thin delegation over the core.
#[wasm_bindgen]
pub struct RippleEngine {
    core: EngineCore,
}

#[wasm_bindgen]
impl RippleEngine {
    /// Create an engine for a surface of the given dimensions.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: EngineCore::new(width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.core.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.core.height()
    }

    #[wasm_bindgen(getter)]
    pub fn ripple_count(&self) -> u32 {
        self.core.ripple_count() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Feed one pointer-move event in viewport coordinates.
    /// Returns true when a movement ripple spawned.
    pub fn pointer_move(&mut self, x: f32, y: f32, now_ms: f64) -> bool {
        self.core.pointer_move(x, y, now_ms)
    }

    /// Feed one click event. Always spawns exactly one click ripple.
    pub fn pointer_click(&mut self, x: f32, y: f32) {
        self.core.pointer_click(x, y);
    }

    /// Track a viewport resize. In-flight ripples keep their coordinates.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.core.resize(width, height);
    }

    /// Drop all live ripples and reset the movement gate.
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Advance one display frame: grow, fade, retire, rebuild the draw list.
    pub fn step(&mut self) {
        self.core.step();
    }

    pub fn load_theme(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_theme_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn get_theme_json(&self) -> String {
        self.core.theme_manifest_json()
    }

    // === DRAW LIST ABI (for JS-side painters) ===

    /// Pack the current draw list and return a pointer into wasm memory.
    pub fn draws_ptr(&mut self) -> *const f32 {
        self.core.pack_draws()
    }

    /// Number of packed draw entries.
    pub fn draw_count(&self) -> usize {
        self.core.draw_count()
    }

    /// f32 lanes per packed entry: x, y, radius, opacity, secondary flag.
    pub fn draw_stride(&self) -> usize {
        DRAW_STRIDE
    }
}
