#![cfg(target_arch = "wasm32")]
//! Scroll-driven 3D model showcase.
//!
//! Renders one glTF model over a scrolling page: the scroll position picks
//! a section, each section has a target pose, and a loading bar tracks the
//! asset fetch. Pure logic lives under [`core`]; everything else is web
//! glue.

use crate::core::AppState;
use crate::frame::FrameContext;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod loader;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("donut-scroll starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .query_selector(constants::CANVAS_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", constants::CANVAS_SELECTOR))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    events::wire_canvas_resize(&canvas);
    events::wire_scroll_reset_on_unload();

    let started = Instant::now();
    let state = Rc::new(RefCell::new(AppState::new()));
    // Align the tracker with a page that starts pre-scrolled; the model is
    // still pending, so this only records the section
    state
        .borrow_mut()
        .on_scroll(dom::scroll_offset(), dom::viewport_height(), 0.0);
    events::wire_scroll(state.clone(), started);

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        state,
        gpu,
        canvas,
        started,
        last_instant: started,
    }));

    loader::spawn_model_load(frame_ctx.clone(), started);
    frame::start_loop(frame_ctx);

    Ok(())
}
