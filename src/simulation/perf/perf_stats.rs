use wasm_bindgen::prelude::*;

/// Last-step metrics snapshot (zeros when perf is disabled).
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) live_ripples: u32,
    pub(super) spawned_move: u32,
    pub(super) spawned_click: u32,
    pub(super) retired: u32,
    pub(super) draw_calls: u32,
}

#[wasm_bindgen]
impl PerfStats {
    pub fn step_ms(&self) -> f64 {
        self.step_ms
    }

    pub fn live_ripples(&self) -> u32 {
        self.live_ripples
    }

    /// Movement ripples spawned since the previous step.
    pub fn spawned_move(&self) -> u32 {
        self.spawned_move
    }

    /// Click ripples spawned since the previous step.
    pub fn spawned_click(&self) -> u32 {
        self.spawned_click
    }

    /// Ripples that faded out during the last step.
    pub fn retired(&self) -> u32 {
        self.retired
    }

    pub fn draw_calls(&self) -> u32 {
        self.draw_calls
    }
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}
