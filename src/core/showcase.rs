use crate::core::constants::*;
use rand::Rng;
use std::fmt::Write;

/// Small line icon drawn next to timeline entries and project titles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Navigation,
    Compass,
    Radar,
    Chart,
    Dashboard,
}

impl Glyph {
    /// Path data on a 24x24 grid.
    pub fn path(self) -> &'static str {
        match self {
            Glyph::Navigation => "M12 2 L19 21 L12 17 L5 21 Z",
            Glyph::Compass => {
                "M12 3 A9 9 0 1 0 12.01 3 Z M16.2 7.8 L14.1 14.1 L7.8 16.2 L9.9 9.9 Z"
            }
            Glyph::Radar => "M12 3 A9 9 0 1 0 21 12 M12 7 A5 5 0 1 0 17 12 M12 12 L19 5",
            Glyph::Chart => "M3 6 L9 3 L15 6 L21 3 L21 18 L15 21 L9 18 L3 21 Z M9 3 V18 M15 6 V21",
            Glyph::Dashboard => {
                "M3 3 H10 V12 H3 Z M14 3 H21 V8 H14 Z M14 12 H21 V21 H14 Z M3 16 H10 V21 H3 Z"
            }
        }
    }
}

/// One entry of the experience timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MissionEntry {
    pub period: &'static str,
    pub title: &'static str,
    pub org: &'static str,
    pub desc: &'static str,
    pub glyph: Glyph,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub desc: &'static str,
    pub tech: &'static [&'static str],
    pub glyph: Glyph,
    pub featured: bool,
}

/// Staggered reveal delay for the i-th card of a list, in seconds.
#[inline]
pub fn reveal_delay(base: f32, step: f32, index: usize) -> f32 {
    base + step * index as f32
}

/// Decorative band placed between page sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DividerKind {
    Sonar,
    Bubbles,
    Depth,
    Signal,
}

impl DividerKind {
    /// Value of the `data-divider` attribute.
    pub fn from_attr(value: &str) -> Option<Self> {
        match value.trim() {
            "sonar" => Some(DividerKind::Sonar),
            "bubbles" => Some(DividerKind::Bubbles),
            "depth" => Some(DividerKind::Depth),
            "signal" => Some(DividerKind::Signal),
            _ => None,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            DividerKind::Sonar => "divider-sonar",
            DividerKind::Bubbles => "divider-bubbles",
            DividerKind::Depth => "divider-depth",
            DividerKind::Signal => "divider-signal",
        }
    }
}

/// Final diameter of the i-th expanding ring of the sonar divider.
#[inline]
pub fn sonar_ring_diameter(index: usize) -> f32 {
    DIVIDER_SONAR_BASE_PX + DIVIDER_SONAR_STEP_PX * index as f32
}

/// One rising bubble of the bubbles divider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RisingBubble {
    pub left_percent: f32,
    pub size_px: f32,
    pub delay_s: f32,
    pub duration_s: f32,
    pub rise_percent: f32,
    pub drift_px: f32,
}

/// Lay out the bubbles divider. Columns and sizes repeat in a fixed pattern;
/// rise height, drift and duration are jittered. Even bubbles drift right,
/// odd ones left.
pub fn rising_bubbles<R: Rng>(rng: &mut R) -> Vec<RisingBubble> {
    (0..DIVIDER_BUBBLES)
        .map(|i| {
            let side = if i % 2 == 0 { 1.0 } else { -1.0 };
            RisingBubble {
                left_percent: 10.0 + ((i * 7) % 80) as f32,
                size_px: 6.0 + (i % 4) as f32 * 4.0,
                delay_s: i as f32 * 0.15,
                duration_s: 2.5 + rng.gen::<f32>() * 1.5,
                rise_percent: 60.0 + rng.gen::<f32>() * 40.0,
                drift_px: side * (10.0 + rng.gen::<f32>() * 15.0),
            }
        })
        .collect()
}

#[inline]
pub fn depth_tick_is_major(index: usize) -> bool {
    index % DIVIDER_DEPTH_MAJOR_EVERY == 0
}

/// Sine-like carrier drawn with alternating quadratic curves across a
/// 1000-unit wide, 48-unit high box.
pub fn signal_wave_path() -> String {
    let half = DIVIDER_SIGNAL_HALF_WAVE;
    let mut d = String::from("M0,24");
    for k in 0..DIVIDER_SIGNAL_WIDTH / half {
        let crest = if k % 2 == 0 { 4 } else { 44 };
        _ = write!(d, " Q{},{} {},24", k * half + half / 2, crest, (k + 1) * half);
    }
    d
}

/// Scale of the i-th static ring behind the hero heading.
#[inline]
pub fn hero_ring_scale(index: usize) -> f32 {
    0.3 + 0.25 * index as f32
}

/// Fixed-position backdrop: two clusters of pulsing rings, drifting specks
/// and bubble columns rising from the bottom edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Backdrop {
    pub primary_pulse_delays: Vec<f32>,
    pub accent_pulse_delays: Vec<f32>,
    pub specks: Vec<Speck>,
    pub bubble_columns: Vec<BubbleColumn>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Speck {
    pub left_percent: f32,
    pub top_percent: f32,
    pub delay_s: f32,
    pub duration_s: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubbleColumn {
    pub left_percent: f32,
    pub delay_s: f32,
    pub duration_s: f32,
}

impl Backdrop {
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        Self {
            primary_pulse_delays: (0..BACKGROUND_PRIMARY_PULSES).map(|i| i as f32).collect(),
            accent_pulse_delays: (0..BACKGROUND_ACCENT_PULSES)
                .map(|i| i as f32 * 1.5 + 0.5)
                .collect(),
            specks: (0..BACKGROUND_SPECKS)
                .map(|_| Speck {
                    left_percent: rng.gen_range(0.0..100.0),
                    top_percent: rng.gen_range(0.0..100.0),
                    delay_s: rng.gen_range(0.0..6.0),
                    duration_s: 4.0 + rng.gen::<f32>() * 4.0,
                })
                .collect(),
            bubble_columns: (0..BACKGROUND_BUBBLE_COLUMNS)
                .map(|i| BubbleColumn {
                    left_percent: 15.0 + i as f32 * 14.0,
                    delay_s: i as f32 * 1.8,
                    duration_s: 8.0 + i as f32 * 2.0,
                })
                .collect(),
        }
    }
}
