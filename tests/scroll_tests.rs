// Host-side tests for scroll progress and the depth meter readout.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
}

use crate::core::scroll::*;

#[test]
fn progress_is_clamped() {
    assert_eq!(ScrollProgress::from_metrics(0.0, 3000.0, 1000.0).value(), 0.0);
    assert_eq!(ScrollProgress::from_metrics(1000.0, 3000.0, 1000.0).value(), 0.5);
    assert_eq!(ScrollProgress::from_metrics(5000.0, 3000.0, 1000.0).value(), 1.0);
    // overscroll bounce on some browsers reports negative offsets
    assert_eq!(ScrollProgress::from_metrics(-40.0, 3000.0, 1000.0).value(), 0.0);
}

#[test]
fn short_page_does_not_divide_by_zero() {
    let p = ScrollProgress::from_metrics(0.0, 800.0, 800.0);
    assert_eq!(p.value(), 0.0);
    let p = ScrollProgress::from_metrics(0.0, 600.0, 800.0);
    assert_eq!(p.value(), 0.0);
    assert_eq!(ScrollProgress::new(f32::NAN).value(), 0.0);
    assert_eq!(ScrollProgress::from_metrics(f64::NAN, 3000.0, 1000.0).value(), 0.0);
}

#[test]
fn depth_is_rounded_meters() {
    assert_eq!(ScrollProgress::new(0.0).depth_meters(), 0);
    assert_eq!(ScrollProgress::new(0.5).depth_meters(), 1600);
    assert_eq!(ScrollProgress::new(1.0).depth_meters(), 3200);
    assert_eq!(ScrollProgress::new(0.0001).depth_meters(), 0);
    assert_eq!(ScrollProgress::new(0.01).depth_readout(), "0032m");
}

#[test]
fn depth_zones_follow_thresholds() {
    assert_eq!(ScrollProgress::new(0.1).zone(), DepthZone::Surface);
    assert_eq!(ScrollProgress::new(0.2).zone(), DepthZone::Midwater);
    assert_eq!(ScrollProgress::new(0.5).zone(), DepthZone::DeepSea);
    assert_eq!(ScrollProgress::new(0.8).zone(), DepthZone::Abyss);
    assert_eq!(DepthZone::DeepSea.label(), "DEEP SEA");
}

#[test]
fn pressure_warning_above_seventy_percent() {
    assert!(!ScrollProgress::new(0.7).pressure_warning());
    assert!(ScrollProgress::new(0.71).pressure_warning());
}

#[test]
fn depth_markers_span_the_track() {
    let markers: Vec<_> = depth_marker_positions().collect();
    assert_eq!(markers.len(), 9);
    assert_eq!(markers[0], (0, 0.0));
    assert_eq!(markers[8], (3200, 100.0));
    assert_eq!(markers[4], (1600, 50.0));
}

#[test]
fn nav_and_section_offsets() {
    assert!(!nav_is_scrolled(50.0));
    assert!(nav_is_scrolled(51.0));
    assert_eq!(section_scroll_target(300.0, 1000.0), 1220.0);
    assert_eq!(section_scroll_target(10.0, 0.0), 0.0);
}
