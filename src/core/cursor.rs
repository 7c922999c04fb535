use crate::core::constants::CURSOR_SMOOTHING;
use glam::Vec2;

/// Crosshair position chasing the raw pointer with a first-order low-pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    pub pos: Vec2,
    pub target: Vec2,
}

impl CursorState {
    #[inline]
    pub fn set_target(&mut self, x: f32, y: f32) {
        self.target = Vec2::new(x, y);
    }

    /// Advance one animation frame.
    #[inline]
    pub fn step(&mut self) {
        self.pos += (self.target - self.pos) * CURSOR_SMOOTHING;
    }

    /// Keep the crosshair below the fixed header.
    #[inline]
    pub fn clamped_y(&self, header_height: f32) -> f32 {
        self.pos.y.max(header_height)
    }

    #[inline]
    pub fn x_percent(&self, viewport_width: f32) -> f32 {
        if viewport_width > 0.0 {
            self.pos.x / viewport_width * 100.0
        } else {
            0.0
        }
    }
}

/// Screen-center relative bearing in degrees, rounded to the 0.1° the
/// readout shows and wrapped into \[0, 360).
pub fn bearing_deg(raw_x: f32, viewport_width: f32) -> f32 {
    let center_x = viewport_width / 2.0;
    if center_x <= 0.0 {
        return 0.0;
    }
    let raw = (raw_x - center_x) / center_x * 180.0;
    let wrapped = ((raw * 10.0).round() / 10.0).rem_euclid(360.0);
    // also folds -0.0 so the readout never shows "-0.0°"
    if wrapped >= 360.0 || wrapped == 0.0 {
        0.0
    } else {
        wrapped
    }
}

#[inline]
pub fn bearing_readout(bearing: f32) -> String {
    format!("{:.1}°", bearing)
}
