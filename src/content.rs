use crate::core::radar::SkillDatum;
use crate::core::showcase::{Glyph, MissionEntry, Project};
use crate::core::tactical::{ContactKind, SonarContact};
use glam::Vec2;

// Authored page data. Rendered once at startup.

pub const FRONTEND_SKILLS: [SkillDatum; 6] = [
    SkillDatum::at("React", 0.95, 0.0),
    SkillDatum::at("TypeScript", 0.9, 60.0),
    SkillDatum::at("JavaScript", 0.95, 120.0),
    SkillDatum::at("CSS/Tailwind", 0.88, 180.0),
    SkillDatum::at("Framer Motion", 0.82, 240.0),
    SkillDatum::at("UI Systems", 0.85, 300.0),
];

pub const BACKEND_SKILLS: [SkillDatum; 6] = [
    SkillDatum::new("Node.js", 0.78),
    SkillDatum::new("WebSockets", 0.82),
    SkillDatum::new("REST APIs", 0.85),
    SkillDatum::new("PostgreSQL", 0.72),
    SkillDatum::new("Firebase", 0.70),
    SkillDatum::new("Docker", 0.65),
];

pub const ROUTE_WAYPOINTS: [Vec2; 6] = [
    Vec2::new(0.2, 0.3),
    Vec2::new(0.35, 0.45),
    Vec2::new(0.5, 0.4),
    Vec2::new(0.65, 0.55),
    Vec2::new(0.78, 0.48),
    Vec2::new(0.85, 0.6),
];

pub const SONAR_CONTACTS: [SonarContact; 4] = [
    SonarContact {
        pos: Vec2::new(0.3, 0.25),
        label: "SB-04",
        kind: ContactKind::Friendly,
    },
    SonarContact {
        pos: Vec2::new(0.7, 0.35),
        label: "UK-17",
        kind: ContactKind::Unknown,
    },
    SonarContact {
        pos: Vec2::new(0.55, 0.7),
        label: "CT-09",
        kind: ContactKind::Friendly,
    },
    SonarContact {
        pos: Vec2::new(0.15, 0.65),
        label: "SG-22",
        kind: ContactKind::Unknown,
    },
];

pub const MISSION_LOG: [MissionEntry; 2] = [
    MissionEntry {
        period: "2025 — PRESENT",
        title: "Frontend Engineer",
        org: "Aeolus Aero Tech.",
        desc: "Developed interactive map visualizations and data-driven interfaces using React, TypeScript and OpenLayers.",
        glyph: Glyph::Navigation,
    },
    MissionEntry {
        period: "2023 — 2025",
        title: "Frontend Developer",
        org: "TechSwing Solutions.",
        desc: "Leading React architecture for real-time monitoring dashboards. Building performant WebSocket-driven UIs.",
        glyph: Glyph::Compass,
    },
];

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Submarine Combat System",
        desc: "Real-time submarine combat system with interactive sonar visualization, radar, WebSocket-driven position updates, and immersive underwater map interface.",
        tech: &["React", "WebSockets", "Canvas API", "Turf.js", "Three.js"],
        glyph: Glyph::Radar,
        featured: true,
    },
    Project {
        title: "Navigation Chart",
        desc: "Architected a real-time geospatial application featuring live unit tracking, dynamic data visualization, and seamless interactive user controls.",
        tech: &["React", "TypeScript", "D3.js", "REST APIs", "OpenLayers"],
        glyph: Glyph::Chart,
        featured: false,
    },
    Project {
        title: "Digital Revenue Collection System",
        desc: "Developed a comprehensive digital platform to streamline revenue collection processes, enhancing efficiency and transparency.",
        tech: &["React", "WebSockets", "Redux", "Tailwind"],
        glyph: Glyph::Dashboard,
        featured: false,
    },
];
