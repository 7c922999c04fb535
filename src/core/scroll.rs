use crate::core::constants::*;

/// Normalized scroll position in \[0, 1\].
///
/// Recomputed on every scroll event from the window metrics; never stored
/// beyond the handler that derived it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollProgress(f32);

impl ScrollProgress {
    /// Derive progress from the raw scroll offset, total document height and
    /// viewport height. A page that does not scroll yields zero.
    pub fn from_metrics(scroll_y: f64, document_height: f64, viewport_height: f64) -> Self {
        let scrollable = (document_height - viewport_height).max(1.0);
        Self::new((scroll_y / scrollable) as f32)
    }

    #[inline]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self(0.0)
        }
    }

    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }

    #[inline]
    pub fn depth_meters(self) -> u32 {
        (self.0 * MAX_DEPTH_METERS).round() as u32
    }

    /// Zero-padded readout for the depth gauge, e.g. `0420m`.
    pub fn depth_readout(self) -> String {
        format!("{:04}m", self.depth_meters())
    }

    pub fn zone(self) -> DepthZone {
        match self.0 {
            p if p < ZONE_MIDWATER_START => DepthZone::Surface,
            p if p < ZONE_DEEP_SEA_START => DepthZone::Midwater,
            p if p < ZONE_ABYSS_START => DepthZone::DeepSea,
            _ => DepthZone::Abyss,
        }
    }

    #[inline]
    pub fn pressure_warning(self) -> bool {
        self.0 > PRESSURE_WARNING_PROGRESS
    }

    /// Percent string used for the meter fill height and indicator position.
    #[inline]
    pub fn percent(self) -> f32 {
        self.0 * 100.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepthZone {
    Surface,
    Midwater,
    DeepSea,
    Abyss,
}

impl DepthZone {
    pub fn label(self) -> &'static str {
        match self {
            DepthZone::Surface => "SURFACE",
            DepthZone::Midwater => "MIDWATER",
            DepthZone::DeepSea => "DEEP SEA",
            DepthZone::Abyss => "ABYSS",
        }
    }
}

/// Vertical position (percent) of each fixed depth marker along the meter.
pub fn depth_marker_positions() -> impl Iterator<Item = (u32, f32)> {
    let last = (DEPTH_MARKERS.len() - 1) as f32;
    DEPTH_MARKERS
        .iter()
        .enumerate()
        .map(move |(i, m)| (*m, i as f32 / last * 100.0))
}

#[inline]
pub fn nav_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_THRESHOLD_PX
}

/// Absolute scroll target for an in-page link so the section lands below the
/// fixed header.
#[inline]
pub fn section_scroll_target(element_top: f64, page_y_offset: f64) -> f64 {
    (element_top + page_y_offset - NAV_HEADER_OFFSET_PX).max(0.0)
}
