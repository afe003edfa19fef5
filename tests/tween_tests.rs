// Host-side tests for the tween channels.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod tween {
    include!("../src/core/tween.rs");
}

use tween::*;

const EPS: f32 = 1e-6;

#[test]
fn easings_hit_their_endpoints() {
    for easing in [Easing::Linear, Easing::QuadOut, Easing::QuadInOut] {
        assert!((easing.apply(0.0) - 0.0).abs() < EPS);
        assert!((easing.apply(1.0) - 1.0).abs() < EPS);
    }
}

#[test]
fn easing_midpoints() {
    assert!((Easing::Linear.apply(0.5) - 0.5).abs() < EPS);
    assert!((Easing::QuadOut.apply(0.5) - 0.75).abs() < EPS);
    // In-out is symmetric, so the midpoint is exact
    assert!((Easing::QuadInOut.apply(0.5) - 0.5).abs() < EPS);
    // Out of range input clamps instead of extrapolating
    assert!((Easing::QuadInOut.apply(2.0) - 1.0).abs() < EPS);
}

#[test]
fn tween_holds_before_start_and_lands_after_end() {
    let tw = Tween {
        from: 2.0,
        to: 6.0,
        start: 1.0,
        duration: 2.0,
        easing: Easing::Linear,
    };
    assert_eq!(tw.value_at(0.0), 2.0);
    assert_eq!(tw.value_at(1.0), 2.0);
    assert!((tw.value_at(2.0) - 4.0).abs() < EPS);
    assert_eq!(tw.value_at(3.0), 6.0);
    assert_eq!(tw.value_at(100.0), 6.0);
    assert!(!tw.finished(2.9));
    assert!(tw.finished(3.0));
}

#[test]
fn zero_duration_snaps_to_target() {
    let tw = Tween {
        from: 0.0,
        to: 5.0,
        start: 1.0,
        duration: 0.0,
        easing: Easing::Linear,
    };
    assert_eq!(tw.value_at(1.5), 5.0);
    assert!(tw.finished(1.0));
}

#[test]
fn channel_set_cancels_inflight_tween() {
    let mut ch = Channel::new(0.0);
    ch.go_to(10.0, 0.0, 1.0, 0.0, Easing::Linear);
    assert!(ch.is_animating());
    ch.set(3.0);
    assert!(!ch.is_animating());
    assert_eq!(ch.sample(100.0), 3.0);
}

#[test]
fn retarget_supersedes_from_the_inflight_value() {
    let mut ch = Channel::new(0.0);
    ch.go_to(10.0, 0.0, 1.0, 0.0, Easing::Linear);
    assert!((ch.sample(0.5) - 5.0).abs() < EPS);

    // Re-target mid-flight: the new tween starts from the sampled value
    ch.go_to(-10.0, 0.5, 1.0, 0.0, Easing::Linear);
    assert!((ch.sample(0.5) - 5.0).abs() < EPS);
    assert!((ch.sample(1.0) + 2.5).abs() < EPS);
    assert_eq!(ch.sample(1.5), -10.0);
    assert!(!ch.is_animating());
}

#[test]
fn delay_holds_the_previous_value() {
    let mut ch = Channel::new(1.0);
    ch.go_to(0.0, 0.0, 3.0, 1.0, Easing::QuadOut);
    assert_eq!(ch.sample(0.5), 1.0);
    assert_eq!(ch.sample(1.0), 1.0);
    let mid = ch.sample(2.5);
    assert!(mid > 0.0 && mid < 1.0, "mid fade should be partial: {mid}");
    assert_eq!(ch.sample(4.0), 0.0);
}

#[test]
fn finished_tween_is_dropped_after_sampling() {
    let mut ch = Channel::new(0.0);
    ch.go_to(1.0, 0.0, 1.0, 0.0, Easing::Linear);
    assert!(ch.is_animating());
    ch.sample(2.0);
    assert!(!ch.is_animating());
    assert_eq!(ch.value(), 1.0);
}
