// Host-side tests for load-progress accounting.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod progress {
    include!("../src/core/progress.rs");
}

use progress::*;

#[test]
fn ratio_basics() {
    assert_eq!(progress_ratio(3, 4), 0.75);
    assert_eq!(progress_ratio(0, 4), 0.0);
    assert_eq!(progress_ratio(4, 4), 1.0);
}

#[test]
fn zero_total_is_defined_as_empty() {
    assert_eq!(progress_ratio(0, 0), 0.0);
    assert_eq!(progress_ratio(3, 0), 0.0);
}

#[test]
fn overcount_clamps_to_full() {
    assert_eq!(progress_ratio(5, 4), 1.0);
}

#[test]
fn counter_tracks_items_discovered_mid_load() {
    let mut counter = LoadCounter::new();
    assert_eq!(counter.ratio(), 0.0);

    counter.add_items(1);
    assert_eq!(counter.mark_loaded(), 1.0);

    // The document revealed two more items: the ratio drops, which the
    // bar must tolerate (no smoothing)
    counter.add_items(2);
    assert!((counter.ratio() - 1.0 / 3.0).abs() < 1e-6);

    assert!((counter.mark_loaded() - 2.0 / 3.0).abs() < 1e-6);
    assert_eq!(counter.mark_loaded(), 1.0);
    assert_eq!(counter.counts(), (3, 3));
}
