//! Asset loading: fetch the glTF document and every buffer it references,
//! reporting per-item progress to the loading bar, then hand the baked mesh
//! to the GPU and run the completion sequence.

use crate::constants::{COMPLETION_DELAY_MS, MODEL_URL};
use crate::core::{bake_scene, LoadCounter};
use crate::dom;
use crate::frame::FrameContext;
use crate::overlay;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub fn spawn_model_load(frame_ctx: Rc<RefCell<FrameContext>>, started: Instant) {
    spawn_local(async move {
        if let Err(e) = load(frame_ctx, started).await {
            log::error!("model load error: {:?}", e);
        }
    });
}

async fn load(frame_ctx: Rc<RefCell<FrameContext>>, started: Instant) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let mut counter = LoadCounter::new();

    counter.add_items(1);
    let gltf_bytes = match fetch_bytes(MODEL_URL).await {
        Ok(b) => b,
        Err(e) => {
            log::error!("failed to load {}: {:?}", MODEL_URL, e);
            return Err(e);
        }
    };
    overlay::set_progress(&document, counter.mark_loaded());

    let gltf::Gltf {
        document: scene_doc,
        mut blob,
    } = gltf::Gltf::from_slice(&gltf_bytes)?;

    // Resolve each buffer: GLB blob directly, external URIs by fetching
    // relative to the model. A failed item is logged and skipped; loading
    // of the rest continues.
    let fetchable = scene_doc
        .buffers()
        .filter(|b| matches!(b.source(), gltf::buffer::Source::Uri(u) if !u.starts_with("data:")))
        .count();
    counter.add_items(fetchable as u32);

    let mut buffers: Vec<Option<Vec<u8>>> = Vec::new();
    for buffer in scene_doc.buffers() {
        match buffer.source() {
            gltf::buffer::Source::Bin => buffers.push(blob.take()),
            gltf::buffer::Source::Uri(uri) if uri.starts_with("data:") => {
                log::error!("data: buffer URIs are not supported: {}", MODEL_URL);
                buffers.push(None);
            }
            gltf::buffer::Source::Uri(uri) => {
                let url = resolve_sibling(MODEL_URL, uri);
                match fetch_bytes(&url).await {
                    Ok(bytes) => buffers.push(Some(bytes)),
                    Err(e) => {
                        log::error!("failed to load {}: {:?}", url, e);
                        buffers.push(None);
                    }
                }
                overlay::set_progress(&document, counter.mark_loaded());
            }
        }
    }

    // All items have been attempted: run the completion sequence whether or
    // not every buffer made it, as the source's loading manager did
    schedule_completion(frame_ctx.clone(), started);

    let mesh = bake_scene(&scene_doc, &buffers)?;
    log::info!(
        "model loaded: {} primitives, {} vertices",
        mesh.primitives.len(),
        mesh.vertex_count()
    );

    let mut ctx = frame_ctx.borrow_mut();
    if let Some(gpu) = ctx.gpu.as_mut() {
        gpu.upload_mesh(&mesh);
    }
    ctx.state.borrow_mut().model_ready();
    Ok(())
}

/// After a short grace delay: flip the DOM into its loaded state and start
/// the overlay fade.
fn schedule_completion(frame_ctx: Rc<RefCell<FrameContext>>, started: Instant) {
    let closure = Closure::wrap(Box::new(move || {
        if let Some(document) = dom::window_document() {
            overlay::finish(&document);
        }
        let ctx = frame_ctx.borrow();
        ctx.state
            .borrow_mut()
            .begin_fade_out(started.elapsed().as_secs_f32());
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            COMPLETION_DELAY_MS,
        );
    }
    closure.forget();
}

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", url, e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !resp.ok() {
        return Err(anyhow::anyhow!("HTTP {} for {}", resp.status(), url));
    }
    let buf = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Resolve a buffer URI against the directory of the model URL.
fn resolve_sibling(base: &str, relative: &str) -> String {
    match base.rfind('/') {
        Some(idx) => format!("{}/{}", &base[..idx], relative),
        None => relative.to_string(),
    }
}
