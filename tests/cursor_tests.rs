// Host-side tests for crosshair smoothing and bearing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod cursor {
        include!("../src/core/cursor.rs");
    }
}

use crate::core::cursor::*;

#[test]
fn smoothing_converges_geometrically() {
    let mut c = CursorState::default();
    c.set_target(500.0, 300.0);
    let initial = (c.target - c.pos).length();
    let mut prev = initial;
    for _ in 0..30 {
        c.step();
        let d = (c.target - c.pos).length();
        assert!((d - prev * 0.7).abs() < 1e-3, "expected {} got {}", prev * 0.7, d);
        prev = d;
    }
    let expected = initial * 0.7f32.powi(30);
    assert!(((c.pos - c.target).length() - expected).abs() < 1e-3);
    for _ in 0..10 {
        c.step();
    }
    assert!((c.pos - c.target).length() < 0.01);
}

#[test]
fn axes_are_smoothed_independently() {
    let mut c = CursorState::default();
    c.set_target(100.0, 0.0);
    c.step();
    assert!((c.pos.x - 30.0).abs() < 1e-5);
    assert_eq!(c.pos.y, 0.0);
}

#[test]
fn bearing_wraps_into_full_circle() {
    assert_eq!(bearing_deg(500.0, 1000.0), 0.0);
    assert!((bearing_deg(1000.0, 1000.0) - 180.0).abs() < 1e-4);
    assert!((bearing_deg(750.0, 1000.0) - 90.0).abs() < 1e-4);
    assert!((bearing_deg(250.0, 1000.0) - 270.0).abs() < 1e-4);
    assert!((bearing_deg(0.0, 1000.0) - 180.0).abs() < 1e-4);
    assert_eq!(bearing_deg(10.0, 0.0), 0.0);
    for x in 0..=1000 {
        let b = bearing_deg(x as f32, 1000.0);
        assert!((0.0..360.0).contains(&b));
    }
}

#[test]
fn readout_and_header_clamp() {
    assert_eq!(bearing_readout(90.0), "90.0°");
    let mut c = CursorState::default();
    c.pos.y = 20.0;
    assert_eq!(c.clamped_y(64.0), 64.0);
    c.pos.y = 300.0;
    assert_eq!(c.clamped_y(64.0), 300.0);
    c.pos.x = 250.0;
    assert!((c.x_percent(1000.0) - 25.0).abs() < 1e-5);
}

#[test]
fn readout_never_reaches_360() {
    // just left of centre is a hair under 360 and must read as north
    let b = bearing_deg(499.9, 1000.0);
    assert_eq!(b, 0.0);
    assert_eq!(bearing_readout(b), "0.0°");

    assert_eq!(bearing_readout(bearing_deg(499.7, 1000.0)), "359.9°");
    for x in 0..10_000 {
        let text = bearing_readout(bearing_deg(x as f32 * 0.1, 1000.0));
        assert_ne!(text, "360.0°");
        assert!(!text.starts_with('-'), "{text}");
    }
}
