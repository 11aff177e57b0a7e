// Host-side tests for constants and their relationships.
// The web crate is wasm-only, so its DOM constants are included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use ring_core::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_bounds_are_ordered() {
    assert_eq!(MIN_PARTICLES, 16);
    assert_eq!(MAX_PARTICLES, 8000);
    assert!(MIN_PARTICLES <= DEFAULT_PARTICLES && DEFAULT_PARTICLES <= MAX_PARTICLES);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_constants_are_fractions() {
    assert!(ROTATION_SMOOTHING > 0.0 && ROTATION_SMOOTHING < 1.0);
    assert!(DRAG_SENSITIVITY > 0.0);
    assert!(JITTER_FRACTION > 0.0 && JITTER_FRACTION <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ring_fits_inside_the_view() {
    // Ring plus half the tube must stay well inside half the shorter side.
    let outer = RING_RADIUS_FRACTION * (1.0 + 0.5 * RING_THICKNESS);
    assert!(outer < 0.5);
    // Nearest point must stay in front of the eye for any aspect ratio.
    assert!(FOV_FACTOR > outer);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn dot_formula_limits() {
    assert!(DOT_RADIUS_MIN > 0.0);
    assert!(ALPHA_MAX > 0.0 && ALPHA_MAX <= 1.0);
    assert!(ALPHA_BASE >= 0.0 && ALPHA_BASE < ALPHA_MAX);
}

#[test]
fn default_color_parses() {
    assert!(Rgb::from_hex(DEFAULT_DOT_COLOR).is_ok());
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [
        CONTAINER_ID,
        PARTICLE_COUNT_ID,
        PARTICLE_COUNT_READOUT_ID,
        DOT_SIZE_ID,
        DOT_SIZE_READOUT_ID,
        DOT_COLOR_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_eq!(CONTAINER_ID, "sphere-container");
    assert_eq!(CANVAS_ROLE, "img");
}

#[test]
fn release_events_cover_up_cancel_and_leave() {
    assert!(POINTER_RELEASE_EVENTS.contains(&"pointerup"));
    assert!(POINTER_RELEASE_EVENTS.contains(&"pointercancel"));
    assert!(POINTER_RELEASE_EVENTS.contains(&"pointerleave"));
}
