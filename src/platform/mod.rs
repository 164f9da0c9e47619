//! Browser platform glue: the overlay surface, input listeners, and the
//! frame loop. wasm32-only; the engine core stays DOM-free.

pub mod web_overlay;
mod web_paint;
