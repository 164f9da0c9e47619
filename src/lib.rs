//! Ripple Engine - water ripple cursor trail in WASM
//!
//! Maintains a bounded-lifetime set of expanding, fading ring particles
//! driven by pointer movement and clicks, painted every frame onto a
//! non-interactive full-viewport canvas overlay.
//!
//! Architecture:
//! - domain/     - Ripple particle and color theme
//! - systems/    - Spawn throttle and render extract
//! - simulation/ - Engine core and WASM facade
//! - platform/   - Browser overlay: canvas, listeners, frame loop

pub mod domain;
pub mod systems;
pub mod simulation;
#[cfg(target_arch = "wasm32")]
pub mod platform;

// Compatibility re-exports (keeps the common paths short)
pub use domain::ripple;
pub use domain::theme;
pub use systems::spawn;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🌊 Ripple WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::ripple::{Ripple, RippleKind};
pub use domain::theme::Theme;
pub use simulation::{PerfStats, RippleEngine};
#[cfg(target_arch = "wasm32")]
pub use platform::web_overlay::RippleOverlay;
