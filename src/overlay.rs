//! Loading-bar DOM updates.
//!
//! The bar and the `<body>` classes are the only cross-boundary signals to
//! the page's CSS; everything else stays on the canvas.

use crate::constants::{BODY_LOADED_CLASS, LOADING_BAR_ENDED_CLASS, LOADING_BAR_SELECTOR};
use web_sys as web;

fn loading_bar(document: &web::Document) -> Option<web::Element> {
    document.query_selector(LOADING_BAR_SELECTOR).ok().flatten()
}

/// Scale the bar to the current fill ratio (0 = empty, 1 = full).
pub fn set_progress(document: &web::Document, ratio: f32) {
    if let Some(el) = loading_bar(document) {
        _ = el.set_attribute("style", &format!("transform: scaleX({:.4})", ratio));
    }
}

/// Terminal state once loading finished: mark the bar ended, clear its
/// inline transform so the CSS exit animation isn't fighting a stale scale,
/// and unhide the page content.
pub fn finish(document: &web::Document) {
    if let Some(el) = loading_bar(document) {
        _ = el.class_list().add_1(LOADING_BAR_ENDED_CLASS);
        _ = el.remove_attribute("style");
    }
    if let Some(body) = document.body() {
        _ = body.class_list().add_1(BODY_LOADED_CLASS);
    }
}
