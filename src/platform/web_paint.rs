//! Canvas2D painter for the extracted draw list.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::domain::theme::Theme;
use crate::simulation::EngineCore;
use crate::systems::render::{
    RippleDraw, GLOW_PEAK_ALPHA, GLOW_PEAK_STOP, RING_WIDTH, SECONDARY_RING_ALPHA,
    SECONDARY_RING_SCALE, SECONDARY_RING_WIDTH,
};

/// Repaint the whole surface from the engine's current draw list.
pub(super) fn paint(ctx: &CanvasRenderingContext2d, engine: &EngineCore) {
    ctx.clear_rect(0.0, 0.0, engine.width() as f64, engine.height() as f64);

    let theme = engine.theme();
    for draw in engine.draw_list() {
        // A failing arc means a detached or lost context; skip quietly and
        // try again next frame.
        let _ = paint_ripple(ctx, theme, draw);
    }
}

fn paint_ripple(
    ctx: &CanvasRenderingContext2d,
    theme: &Theme,
    draw: &RippleDraw,
) -> Result<(), JsValue> {
    let x = draw.x as f64;
    let y = draw.y as f64;
    let radius = draw.radius as f64;

    // Primary ring
    ctx.begin_path();
    ctx.arc(x, y, radius, 0.0, TAU)?;
    ctx.set_stroke_style_str(&theme.base.css(draw.opacity));
    ctx.set_line_width(RING_WIDTH);
    ctx.stroke();

    // Inner glow: transparent at center and rim, peaking near the rim
    let gradient = ctx.create_radial_gradient(x, y, 0.0, x, y, radius)?;
    gradient.add_color_stop(0.0, &theme.base.css(0.0))?;
    gradient.add_color_stop(GLOW_PEAK_STOP, &theme.base.css(draw.opacity * GLOW_PEAK_ALPHA))?;
    gradient.add_color_stop(1.0, &theme.base.css(0.0))?;
    ctx.begin_path();
    ctx.arc(x, y, radius, 0.0, TAU)?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill();

    // Secondary ring for click ripples past the reveal radius
    if draw.secondary_ring {
        ctx.begin_path();
        ctx.arc(x, y, radius * SECONDARY_RING_SCALE as f64, 0.0, TAU)?;
        ctx.set_stroke_style_str(&theme.halo.css(draw.opacity * SECONDARY_RING_ALPHA));
        ctx.set_line_width(SECONDARY_RING_WIDTH);
        ctx.stroke();
    }

    Ok(())
}
