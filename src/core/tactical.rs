use crate::core::constants::*;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    Friendly,
    Unknown,
}

impl ContactKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ContactKind::Friendly => "contact-friendly",
            ContactKind::Unknown => "contact-unknown",
        }
    }
}

/// A sonar blip. Coordinates are normalized to the map square.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SonarContact {
    pub pos: Vec2,
    pub label: &'static str,
    pub kind: ContactKind,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapGeometry {
    pub size: f32,
    pub center: Vec2,
    pub max_r: f32,
}

impl MapGeometry {
    pub fn new(size: f32) -> Self {
        let c = size / 2.0;
        Self {
            size,
            center: Vec2::splat(c),
            max_r: (c - MAP_MARGIN).max(0.0),
        }
    }

    #[inline]
    pub fn to_map(&self, normalized: Vec2) -> Vec2 {
        normalized * self.size
    }

    /// SVG path through the route waypoints.
    pub fn route_path(&self, waypoints: &[Vec2]) -> String {
        waypoints
            .iter()
            .enumerate()
            .map(|(i, wp)| {
                let p = self.to_map(*wp);
                let cmd = if i == 0 { 'M' } else { 'L' };
                format!("{}{:.1},{:.1}", cmd, p.x, p.y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn sweep_tip(&self, angle_deg: f32) -> Vec2 {
        let rad = angle_deg.to_radians();
        self.center + Vec2::new(rad.cos(), rad.sin()) * self.max_r
    }

    /// Filled wedge trailing the sweep line.
    pub fn sweep_wedge_path(&self, angle_deg: f32) -> String {
        let rad = angle_deg.to_radians();
        let tip = self.sweep_tip(angle_deg);
        let tail_rad = rad - SWEEP_TRAIL_RAD;
        let tail = self.center + Vec2::new(tail_rad.cos(), tail_rad.sin()) * self.max_r;
        format!(
            "M{c_x:.1},{c_y:.1} L{t_x:.1},{t_y:.1} A{r:.1},{r:.1} 0 0,0 {e_x:.1},{e_y:.1} Z",
            c_x = self.center.x,
            c_y = self.center.y,
            t_x = tip.x,
            t_y = tip.y,
            r = self.max_r,
            e_x = tail.x,
            e_y = tail.y,
        )
    }
}

impl Default for MapGeometry {
    fn default() -> Self {
        Self::new(MAP_SIZE)
    }
}

/// Rotating sonar sweep, advanced by wall-clock time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SweepState {
    pub angle_deg: f32,
}

impl SweepState {
    pub fn advance(&mut self, dt_sec: f32) {
        if !dt_sec.is_finite() || dt_sec <= 0.0 {
            return;
        }
        self.angle_deg = (self.angle_deg + SWEEP_DEG_PER_SEC * dt_sec).rem_euclid(360.0);
    }
}
