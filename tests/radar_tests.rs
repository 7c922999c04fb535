// Host-side tests for skill chart geometry and SVG markup.
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
mod content {
    include!("../src/content.rs");
}

use crate::core::radar::*;
use crate::core::showcase::{Glyph, MissionEntry, Project};
use std::f32::consts::TAU;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn default_geometry() {
    let geo = RadarGeometry::default();
    assert_eq!(geo.size, 260.0);
    assert_eq!(geo.center.x, 130.0);
    assert_eq!(geo.max_r, 90.0);
    assert_eq!(geo.ring_radii(), [22.5, 45.0, 67.5, 90.0]);
}

#[test]
fn vertex_positions_follow_polar_layout() {
    let geo = RadarGeometry::default();
    let p = geo.point(60.0, 0.9);
    assert!(close(p.x, 130.0 + 81.0 * 0.5));
    assert!(close(p.y, 130.0 + 81.0 * 60f32.to_radians().sin()));

    let east = geo.point(0.0, 1.0);
    assert!(close(east.x, 220.0) && close(east.y, 130.0));

    let centre = geo.point(123.0, 0.0);
    assert!(close(centre.x, 130.0) && close(centre.y, 130.0));

    let label = geo.label_pos(90.0);
    assert!(close(label.x, 130.0) && close(label.y, 130.0 + 115.0));
}

#[test]
fn missing_angles_are_spread_evenly() {
    let skills = [
        SkillDatum::new("a", 0.5),
        SkillDatum::new("b", 0.5),
        SkillDatum::new("c", 0.5),
        SkillDatum::new("d", 0.5),
    ];
    let angles: Vec<f32> = (0..4).map(|i| resolved_angle(&skills, i)).collect();
    assert_eq!(angles, vec![0.0, 90.0, 180.0, 270.0]);

    let authored = [SkillDatum::at("x", 1.0, 45.0), SkillDatum::new("y", 1.0)];
    assert_eq!(resolved_angle(&authored, 0), 45.0);
    assert_eq!(resolved_angle(&authored, 1), 180.0);
}

#[test]
fn polygon_points_attr_formats_vertices() {
    let geo = RadarGeometry::default();
    let skills = [
        SkillDatum::at("a", 1.0, 0.0),
        SkillDatum::at("b", 0.5, 180.0),
    ];
    assert_eq!(geo.polygon(&skills).len(), 2);
    assert_eq!(geo.polygon_points_attr(&skills), "220.00,130.00 85.00,130.00");
    assert_eq!(geo.polygon_points_attr(&[]), "");
}

#[test]
fn gauge_dash_offset() {
    let g = Gauge::default();
    assert!(close(g.circumference(), TAU * 32.0));
    assert!(close(g.dash_offset(1.0), 0.0));
    assert!(close(g.dash_offset(0.0), g.circumference()));
    assert!(close(g.dash_offset(0.78), g.circumference() * 0.22));
    // out of range magnitudes never draw past the ends
    assert!(close(g.dash_offset(1.5), 0.0));
    assert!(close(g.dash_offset(-0.2), g.circumference()));
}

#[test]
fn status_thresholds() {
    assert_eq!(SkillDatum::new("a", 0.8).status(), SkillStatus::Operational);
    assert_eq!(SkillDatum::new("a", 0.72).status(), SkillStatus::Nominal);
    assert_eq!(SkillDatum::new("a", 0.7).status(), SkillStatus::Nominal);
    assert_eq!(SkillDatum::new("a", 0.65).status(), SkillStatus::Developing);
    assert_eq!(SkillStatus::Developing.label(), "DEVELOPING");
    assert_eq!(SkillDatum::new("a", 0.78).percent(), 78);
}

#[test]
fn escape_markup() {
    assert_eq!(svg::escape("CSS/Tailwind"), "CSS/Tailwind");
    assert_eq!(
        svg::escape(r#"<a href="x">&'"#),
        "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
    );
}

#[test]
fn radar_chart_markup() {
    let skills = [
        SkillDatum::at("React", 0.95, 0.0),
        SkillDatum::at("A<B", 0.5, 120.0),
        SkillDatum::at("C", 0.7, 240.0),
    ];
    let out = svg::radar_chart(&skills, &RadarGeometry::default());
    assert!(out.starts_with("<svg"));
    assert!(out.ends_with("</svg>"));
    assert_eq!(out.matches("radar-ring").count(), 4);
    assert_eq!(out.matches("radar-spoke").count(), 3);
    assert_eq!(out.matches("radar-dot").count(), 3);
    assert!(out.contains("A&lt;B"));
    assert!(!out.contains("A<B"));
}

#[test]
fn gauge_card_markup() {
    let card = svg::gauge_card(&SkillDatum::new("Docker", 0.65), &Gauge::default());
    assert!(card.contains("Docker"));
    assert!(card.contains("65%"));
    assert!(card.contains("DEVELOPING"));
    assert!(card.contains(&format!(
        "stroke-dashoffset=\"{:.3}\"",
        Gauge::default().dash_offset(0.65)
    )));
    let grid = svg::gauge_grid(
        &[SkillDatum::new("a", 0.9), SkillDatum::new("b", 0.1)],
        &Gauge::default(),
    );
    assert_eq!(grid.matches("gauge-card").count(), 2);
}

#[test]
fn skill_bars_markup() {
    let bars = svg::skill_bars(&[SkillDatum::new("Rust", 0.5)]);
    assert!(bars.contains("Rust"));
    assert!(bars.contains("50%"));
    assert!(bars.contains("width:50.0%"));
}

#[test]
fn mission_timeline_markup() {
    let entries = [
        MissionEntry {
            period: "2025 — PRESENT",
            title: "Frontend Engineer",
            org: "Deep & Co.",
            desc: "Sonar <dashboards>",
            glyph: Glyph::Navigation,
        },
        MissionEntry {
            period: "2023 — 2025",
            title: "Frontend Developer",
            org: "TechSwing",
            desc: "WebSocket UIs",
            glyph: Glyph::Compass,
        },
    ];
    let out = svg::mission_timeline(&entries);
    assert_eq!(out.matches("timeline-entry").count(), 2);
    assert_eq!(out.matches("timeline-node").count(), 2);
    assert_eq!(out.matches("timeline-rail").count(), 1);
    assert!(out.contains("2025 — PRESENT"));
    assert!(out.contains("Deep &amp; Co."));
    assert!(out.contains("Sonar &lt;dashboards&gt;"));
    assert!(out.contains(Glyph::Compass.path()));
    // cards come in one after another
    assert!(out.contains("--delay:0.20s"));
    assert!(out.contains("--delay:0.35s"));
}

#[test]
fn project_cards_markup() {
    let projects = [
        Project {
            title: "Combat System",
            desc: "Sonar and radar",
            tech: &["React", "Three.js"],
            glyph: Glyph::Radar,
            featured: true,
        },
        Project {
            title: "Chart",
            desc: "Maps",
            tech: &["D3.js"],
            glyph: Glyph::Chart,
            featured: false,
        },
    ];
    let out = svg::project_cards(&projects);
    assert_eq!(out.matches("<article").count(), 2);
    assert_eq!(out.matches("FLAGSHIP").count(), 1);
    assert_eq!(out.matches("project-card glass-panel hud-corner reveal featured").count(), 1);
    assert_eq!(out.matches("tech-chip").count(), 3);
    assert!(out.contains(">Three.js<"));
    let featured = out.find("Combat System").unwrap();
    let plain = out.find(">Chart<").unwrap();
    assert!(featured < plain);
}

#[test]
fn authored_showcase_content() {
    assert_eq!(content::MISSION_LOG.len(), 2);
    assert_eq!(content::PROJECTS.iter().filter(|p| p.featured).count(), 1);
    assert!(content::PROJECTS.iter().all(|p| !p.tech.is_empty()));
    let out = svg::project_cards(&content::PROJECTS);
    assert!(out.contains("Digital Revenue Collection System"));
}
