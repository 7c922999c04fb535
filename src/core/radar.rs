use crate::core::constants::*;
use glam::Vec2;
use std::f32::consts::TAU;

/// One skill reading: `magnitude` in \[0, 1\], optional fixed spoke angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillDatum {
    pub name: &'static str,
    pub magnitude: f32,
    pub angle_deg: Option<f32>,
}

impl SkillDatum {
    pub const fn new(name: &'static str, magnitude: f32) -> Self {
        Self {
            name,
            magnitude,
            angle_deg: None,
        }
    }

    pub const fn at(name: &'static str, magnitude: f32, angle_deg: f32) -> Self {
        Self {
            name,
            magnitude,
            angle_deg: Some(angle_deg),
        }
    }

    #[inline]
    pub fn percent(&self) -> u32 {
        (self.magnitude * 100.0).round() as u32
    }

    pub fn status(&self) -> SkillStatus {
        SkillStatus::from_magnitude(self.magnitude)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillStatus {
    Operational,
    Nominal,
    Developing,
}

impl SkillStatus {
    pub fn from_magnitude(m: f32) -> Self {
        if m >= SKILL_OPERATIONAL_MIN {
            SkillStatus::Operational
        } else if m >= SKILL_NOMINAL_MIN {
            SkillStatus::Nominal
        } else {
            SkillStatus::Developing
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillStatus::Operational => "OPERATIONAL",
            SkillStatus::Nominal => "NOMINAL",
            SkillStatus::Developing => "DEVELOPING",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            SkillStatus::Operational => "status-operational",
            SkillStatus::Nominal => "status-nominal",
            SkillStatus::Developing => "status-developing",
        }
    }
}

/// Polar layout of a square radar chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadarGeometry {
    pub size: f32,
    pub center: Vec2,
    pub max_r: f32,
}

impl RadarGeometry {
    pub fn new(size: f32) -> Self {
        let c = size / 2.0;
        Self {
            size,
            center: Vec2::splat(c),
            max_r: (c - RADAR_MARGIN).max(0.0),
        }
    }

    #[inline]
    pub fn polar(&self, angle_deg: f32, r: f32) -> Vec2 {
        let rad = angle_deg.to_radians();
        self.center + Vec2::new(rad.cos(), rad.sin()) * r
    }

    pub fn point(&self, angle_deg: f32, magnitude: f32) -> Vec2 {
        self.polar(angle_deg, self.max_r * magnitude)
    }

    pub fn spoke_end(&self, angle_deg: f32) -> Vec2 {
        self.polar(angle_deg, self.max_r)
    }

    pub fn label_pos(&self, angle_deg: f32) -> Vec2 {
        self.polar(angle_deg, self.max_r + RADAR_LABEL_OFFSET)
    }

    pub fn ring_radii(&self) -> [f32; 4] {
        RADAR_RINGS.map(|s| self.max_r * s)
    }

    /// Vertices in input order; the SVG polygon closes the shape.
    pub fn polygon(&self, skills: &[SkillDatum]) -> Vec<Vec2> {
        skills
            .iter()
            .enumerate()
            .map(|(i, s)| self.point(resolved_angle(skills, i), s.magnitude))
            .collect()
    }

    pub fn polygon_points_attr(&self, skills: &[SkillDatum]) -> String {
        self.polygon(skills)
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for RadarGeometry {
    fn default() -> Self {
        Self::new(RADAR_SIZE)
    }
}

/// Explicit angle if authored, otherwise spread evenly around the circle.
pub fn resolved_angle(skills: &[SkillDatum], index: usize) -> f32 {
    match skills.get(index).and_then(|s| s.angle_deg) {
        Some(a) => a,
        None => 360.0 / skills.len().max(1) as f32 * index as f32,
    }
}

/// Circular single-value gauge drawn with a dashed stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gauge {
    pub radius: f32,
}

impl Gauge {
    #[inline]
    pub fn circumference(&self) -> f32 {
        TAU * self.radius
    }

    #[inline]
    pub fn dash_offset(&self, magnitude: f32) -> f32 {
        self.circumference() * (1.0 - magnitude.clamp(0.0, 1.0))
    }
}

impl Default for Gauge {
    fn default() -> Self {
        Self {
            radius: GAUGE_RADIUS,
        }
    }
}
