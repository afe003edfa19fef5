// Host-side tests for the scroll-to-section mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod sections {
    include!("../src/core/sections.rs");
}

use sections::*;

#[test]
fn nearest_section_wins() {
    assert_eq!(compute_section(0.0, 800.0), 0);
    assert_eq!(compute_section(399.0, 800.0), 0);
    assert_eq!(compute_section(401.0, 800.0), 1);
    assert_eq!(compute_section(800.0, 800.0), 1);
    assert_eq!(compute_section(1650.0, 800.0), 2);
}

#[test]
fn section_is_clamped_to_table() {
    // Overscroll far past the last section stays on it
    assert_eq!(compute_section(5000.0, 800.0), SECTION_TRANSFORMS.len() - 1);
    // Elastic overscroll above the top stays on the first
    assert_eq!(compute_section(-100.0, 800.0), 0);
}

#[test]
fn degenerate_viewport_maps_to_first_section() {
    assert_eq!(compute_section(1234.0, 0.0), 0);
    assert_eq!(compute_section(1234.0, -5.0), 0);
}

#[test]
fn transform_lookup_is_clamped() {
    assert_eq!(transform_for(0), SECTION_TRANSFORMS[0]);
    assert_eq!(transform_for(99), SECTION_TRANSFORMS[2]);
}

#[test]
fn tracker_reports_changes_only() {
    // 800px viewport, the scroll samples cross two section boundaries
    let samples = [0.0_f32, 750.0, 820.0, 1650.0];
    let expected = [None, Some(1), None, Some(2)];

    let mut tracker = SectionTracker::new();
    for (s, want) in samples.iter().zip(expected.iter()) {
        assert_eq!(tracker.update(*s, 800.0), *want);
    }
    assert_eq!(tracker.current(), 2);
}

#[test]
fn tracker_is_idempotent_within_a_section() {
    let mut tracker = SectionTracker::new();
    assert_eq!(tracker.update(820.0, 800.0), Some(1));
    for _ in 0..10 {
        assert_eq!(tracker.update(820.0, 800.0), None);
    }
    assert_eq!(tracker.current(), 1);
}

#[test]
fn transform_table_values() {
    assert_eq!(SECTION_TRANSFORMS.len(), 3);
    assert_eq!(SECTION_TRANSFORMS[0].position_x, 1.5);
    assert_eq!(SECTION_TRANSFORMS[1].position_x, -1.5);
    assert_eq!(SECTION_TRANSFORMS[2].rotation_z, 0.0314);
}
