// Host-side tests for the tactical map sweep and route geometry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod radar {
        include!("../src/core/radar.rs");
    }
    pub mod showcase {
        include!("../src/core/showcase.rs");
    }
    pub mod tactical {
        include!("../src/core/tactical.rs");
    }
}
mod svg {
    include!("../src/svg.rs");
}

use crate::core::constants::SWEEP_DEG_PER_SEC;
use crate::core::tactical::*;
use glam::Vec2;

#[test]
fn sweep_advances_with_time_and_wraps() {
    let mut s = SweepState::default();
    s.advance(0.030);
    assert!((s.angle_deg - 1.5).abs() < 1e-4);

    s.angle_deg = 359.0;
    s.advance(2.0 / SWEEP_DEG_PER_SEC);
    assert!((s.angle_deg - 1.0).abs() < 1e-3);
    assert!((0.0..360.0).contains(&s.angle_deg));
}

#[test]
fn sweep_ignores_bad_time_steps() {
    let mut s = SweepState { angle_deg: 42.0 };
    s.advance(0.0);
    s.advance(-1.0);
    s.advance(f32::NAN);
    s.advance(f32::INFINITY);
    assert_eq!(s.angle_deg, 42.0);
}

#[test]
fn route_path_scales_waypoints() {
    let geo = MapGeometry::default();
    let path = geo.route_path(&[Vec2::new(0.0, 0.0), Vec2::new(0.5, 0.25), Vec2::new(1.0, 1.0)]);
    assert_eq!(path, "M0.0,0.0 L210.0,105.0 L420.0,420.0");
    assert_eq!(geo.route_path(&[]), "");
}

#[test]
fn sweep_tip_on_outer_ring() {
    let geo = MapGeometry::default();
    assert_eq!(geo.max_r, 180.0);
    let tip = geo.sweep_tip(0.0);
    assert!((tip.x - 390.0).abs() < 1e-3 && (tip.y - 210.0).abs() < 1e-3);
    let down = geo.sweep_tip(90.0);
    assert!((down.x - 210.0).abs() < 1e-3 && (down.y - 390.0).abs() < 1e-3);
    assert!(geo.sweep_wedge_path(0.0).starts_with("M210.0,210.0 L390.0,210.0 A180.0,180.0"));
}

#[test]
fn map_markup_has_sweep_handles_and_contacts() {
    let contacts = [
        SonarContact {
            pos: Vec2::new(0.5, 0.5),
            label: "SB-04",
            kind: ContactKind::Friendly,
        },
        SonarContact {
            pos: Vec2::new(0.1, 0.9),
            label: "UK-17",
            kind: ContactKind::Unknown,
        },
    ];
    let out = svg::tactical_map(&MapGeometry::default(), &[Vec2::new(0.2, 0.3)], &contacts);
    assert!(out.contains(r#"id="sweep-wedge""#));
    assert!(out.contains(r#"id="sweep-line""#));
    assert_eq!(out.matches("map-contact ").count(), 2);
    assert!(out.contains("contact-unknown"));
    assert!(out.contains("M84.0,126.0"));
}
