//! Full-viewport ripple overlay: owns a canvas layered above the page,
//! feeds pointer events into the engine, and drives the frame loop.
//!
//! The overlay is decided once at mount: coarse-pointer (touch) devices and
//! hosts without a usable 2D context get an inert handle with no canvas, no
//! listeners, and no scheduled frames. The canvas never intercepts input
//! (`pointer-events: none`).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent,
    Window,
};

use crate::simulation::EngineCore;

use super::web_paint;

/// Media query gating the whole subsystem off on touch devices.
const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";

/// Stacking order of the overlay canvas, above page content.
const OVERLAY_Z_INDEX: &str = "9990";

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Cancellation token owned by a mounted overlay. The frame loop checks it
/// every iteration; the pending request id is tracked so unmount can cancel
/// the in-flight frame too.
struct FrameLoop {
    cancelled: Cell<bool>,
    raf_id: Cell<Option<i32>>,
}

struct ActiveOverlay {
    window: Window,
    canvas: HtmlCanvasElement,
    frame_loop: Rc<FrameLoop>,
    // Kept alive for the mount's lifetime; dropped (after detach) on unmount.
    frame_closure: FrameClosure,
    on_move: Closure<dyn FnMut(MouseEvent)>,
    on_click: Closure<dyn FnMut(MouseEvent)>,
    on_resize: Closure<dyn FnMut()>,
}

/// A mounted (or capability-disabled) ripple overlay.
#[wasm_bindgen]
pub struct RippleOverlay {
    state: Option<ActiveOverlay>,
}

#[wasm_bindgen]
impl RippleOverlay {
    /// Mount the overlay: capability check, canvas, listeners, frame loop.
    pub fn mount() -> Result<RippleOverlay, JsValue> {
        let Some(window) = web_sys::window() else {
            return Ok(RippleOverlay { state: None });
        };
        if has_coarse_pointer(&window) {
            return Ok(RippleOverlay { state: None });
        }
        let Some(document) = window.document() else {
            return Ok(RippleOverlay { state: None });
        };

        let canvas = create_overlay_canvas(&document)?;
        let Some(ctx) = context_2d(&canvas) else {
            // No drawable context: leave the page untouched.
            canvas.remove();
            return Ok(RippleOverlay { state: None });
        };

        let width = viewport_width(&window);
        let height = viewport_height(&window);
        canvas.set_width(width);
        canvas.set_height(height);

        let engine = Rc::new(RefCell::new(EngineCore::new(width, height)));
        let frame_loop = Rc::new(FrameLoop {
            cancelled: Cell::new(false),
            raf_id: Cell::new(None),
        });

        // mousemove is passive: the handler never calls preventDefault.
        let on_move = {
            let engine = engine.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                engine.borrow_mut().pointer_move(
                    event.client_x() as f32,
                    event.client_y() as f32,
                    js_sys::Date::now(),
                );
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let opts = AddEventListenerOptions::new();
        opts.set_passive(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "mousemove",
            on_move.as_ref().unchecked_ref(),
            &opts,
        )?;

        let on_click = {
            let engine = engine.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                engine
                    .borrow_mut()
                    .pointer_click(event.client_x() as f32, event.client_y() as f32);
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        window.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;

        let on_resize = {
            let engine = engine.clone();
            let window = window.clone();
            let canvas = canvas.clone();
            Closure::wrap(Box::new(move || {
                let width = viewport_width(&window);
                let height = viewport_height(&window);
                canvas.set_width(width);
                canvas.set_height(height);
                engine.borrow_mut().resize(width, height);
            }) as Box<dyn FnMut()>)
        };
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

        let frame_closure = start_frame_loop(&window, engine, ctx, frame_loop.clone());

        Ok(RippleOverlay {
            state: Some(ActiveOverlay {
                window,
                canvas,
                frame_loop,
                frame_closure,
                on_move,
                on_click,
                on_resize,
            }),
        })
    }

    /// Whether the overlay actually mounted (false on coarse-pointer hosts).
    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// Tear down: cancel the pending frame, detach all listeners, remove
    /// the canvas. The handle stays inert afterwards.
    pub fn unmount(&mut self) {
        let Some(active) = self.state.take() else {
            return;
        };
        active.frame_loop.cancelled.set(true);
        if let Some(id) = active.frame_loop.raf_id.take() {
            let _ = active.window.cancel_animation_frame(id);
        }
        let _ = active
            .window
            .remove_event_listener_with_callback("mousemove", active.on_move.as_ref().unchecked_ref());
        let _ = active
            .window
            .remove_event_listener_with_callback("click", active.on_click.as_ref().unchecked_ref());
        let _ = active
            .window
            .remove_event_listener_with_callback("resize", active.on_resize.as_ref().unchecked_ref());
        active.canvas.remove();
        // Breaking the knot here frees the frame closure; the listeners
        // drop with `active`.
        active.frame_closure.borrow_mut().take();
    }
}

impl Drop for RippleOverlay {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Self-rescheduling requestAnimationFrame loop. The returned knot keeps
/// the closure alive while the loop runs; unmount breaks it.
fn start_frame_loop(
    window: &Window,
    engine: Rc<RefCell<EngineCore>>,
    ctx: CanvasRenderingContext2d,
    frame_loop: Rc<FrameLoop>,
) -> FrameClosure {
    let knot: FrameClosure = Rc::new(RefCell::new(None));
    let knot_inner = knot.clone();
    let window_inner = window.clone();
    let loop_state = frame_loop.clone();

    *knot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if loop_state.cancelled.get() {
            return;
        }

        {
            let mut engine = engine.borrow_mut();
            engine.step();
            web_paint::paint(&ctx, &engine);
        }

        if let Some(callback) = knot_inner.borrow().as_ref() {
            match window_inner.request_animation_frame(callback.as_ref().unchecked_ref()) {
                Ok(id) => loop_state.raf_id.set(Some(id)),
                // Scheduling failed: stop rather than spin.
                Err(_) => loop_state.cancelled.set(true),
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(callback) = knot.borrow().as_ref() {
        if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            frame_loop.raf_id.set(Some(id));
        }
    }
    knot
}

fn has_coarse_pointer(window: &Window) -> bool {
    match window.match_media(COARSE_POINTER_QUERY) {
        Ok(Some(list)) => list.matches(),
        // No matchMedia support: assume a fine pointer and stay active.
        _ => false,
    }
}

fn create_overlay_canvas(document: &Document) -> Result<HtmlCanvasElement, JsValue> {
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    let style = canvas.style();
    style.set_property("position", "fixed")?;
    style.set_property("inset", "0")?;
    style.set_property("pointer-events", "none")?;
    style.set_property("z-index", OVERLAY_Z_INDEX)?;
    style.set_property("mix-blend-mode", "screen")?;

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.append_child(&canvas)?;
    Ok(canvas)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn viewport_width(window: &Window) -> u32 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .map(|v| v.max(0.0) as u32)
        .unwrap_or(0)
}

fn viewport_height(window: &Window) -> u32 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .map(|v| v.max(0.0) as u32)
        .unwrap_or(0)
}
