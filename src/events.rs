//! Window event wiring: scroll, resize, and the reload scroll reset.

use crate::core::AppState;
use crate::dom;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drive the section tracker from window scroll events.
pub fn wire_scroll(state: Rc<RefCell<AppState>>, started: Instant) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move || {
            let now = started.elapsed().as_secs_f32();
            state
                .borrow_mut()
                .on_scroll(dom::scroll_offset(), dom::viewport_height(), now);
        }) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Keep the canvas backing size in sync with the window.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Jump back to the top before a reload so the page never comes back
/// mid-section with a stale bar state.
pub fn wire_scroll_reset_on_unload() {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move || {
            if let Some(w) = web::window() {
                w.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }) as Box<dyn FnMut()>);
        _ = window
            .add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
