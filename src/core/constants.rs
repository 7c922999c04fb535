// Shared tuning constants for the scroll effects, gauges and cursor.
// Kept free of web types so host-side tests can include this file directly.

// Scroll / depth
pub const MAX_DEPTH_METERS: f32 = 3200.0;
pub const DEPTH_MARKERS: [u32; 9] = [0, 400, 800, 1200, 1600, 2000, 2400, 2800, 3200];
pub const ZONE_MIDWATER_START: f32 = 0.2;
pub const ZONE_DEEP_SEA_START: f32 = 0.5;
pub const ZONE_ABYSS_START: f32 = 0.8;
pub const PRESSURE_WARNING_PROGRESS: f32 = 0.7;

// Navigation
pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 50.0;
pub const NAV_HEADER_OFFSET_PX: f64 = 80.0;

// Light rays fade out from the top of the page
pub const RAY_OPACITY_BASE: f32 = 0.06;
pub const RAY_OPACITY_FALLOFF: f32 = 0.08;
pub const RAY_VISIBLE_MIN: f32 = 0.005;
pub const RAY_X_PERCENT: [f32; 4] = [15.0, 35.0, 60.0, 80.0];
pub const RAY_BASE_ROTATION_DEG: f32 = -5.0;
pub const RAY_ROTATION_STEP_DEG: f32 = 3.0;
pub const RAY_PARALLAX: f64 = 0.1;

// Pressure darkening overlay
pub const PRESSURE_OVERLAY_MAX: f32 = 0.15;

// Sonar scan line (percent of viewport per scrolled pixel)
pub const SCAN_LINE_RATE: f64 = 0.15;

// Torpedo window
pub const TORPEDO_START: f32 = 0.25;
pub const TORPEDO_END: f32 = 0.45;
pub const TORPEDO_TRAIL_SPAN: f32 = 110.0;
pub const TORPEDO_HEAD_SPAN: f32 = 105.0;
pub const TORPEDO_SECOND_DELAY: f32 = 0.15;
pub const TORPEDO_SECOND_TRAIL_SPAN: f32 = 130.0;
pub const TORPEDO_SECOND_HEAD_SPAN: f32 = 125.0;
pub const TORPEDO_LABEL_FROM: f32 = 0.02;
pub const TORPEDO_LABEL_UNTIL: f32 = 0.35;
pub const WAKE_BUBBLES: usize = 8;
pub const WAKE_SPACING_PERCENT: f32 = 6.0;
pub const WAKE_BASE_TOP_PERCENT: f32 = 44.0;
pub const WAKE_BASE_OPACITY: f32 = 0.3;
pub const WAKE_OPACITY_DECAY: f32 = 0.03;

// Periscope window
pub const PERISCOPE_START: f32 = 0.50;
pub const PERISCOPE_END: f32 = 0.70;
pub const PERISCOPE_RAMP: f32 = 0.05;
pub const PERISCOPE_RING_PERCENT: [f32; 3] = [12.0, 20.0, 30.0];

// Deep ambient glow
pub const AMBIENT_START: f32 = 0.6;
pub const AMBIENT_GAIN: f32 = 2.5;

// Drifting particles
pub const PARTICLE_COUNT: usize = 30;
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_SPAN: f32 = 2.0;
pub const PARTICLE_SPEED_MIN: f32 = 0.3;
pub const PARTICLE_SPEED_SPAN: f32 = 0.7;
pub const PARTICLE_PARALLAX: f64 = 0.05;

// Cursor crosshair
pub const CURSOR_SMOOTHING: f32 = 0.3;

// Radar chart and gauges
pub const RADAR_SIZE: f32 = 260.0;
pub const RADAR_MARGIN: f32 = 40.0;
pub const RADAR_LABEL_OFFSET: f32 = 25.0;
pub const RADAR_RINGS: [f32; 4] = [0.25, 0.5, 0.75, 1.0];
pub const GAUGE_RADIUS: f32 = 32.0;
pub const SKILL_OPERATIONAL_MIN: f32 = 0.8;
pub const SKILL_NOMINAL_MIN: f32 = 0.7;

// Tactical map
pub const MAP_SIZE: f32 = 420.0;
pub const MAP_MARGIN: f32 = 30.0;
pub const SWEEP_DEG_PER_SEC: f32 = 1.5 / 0.030; // 1.5 degrees every 30ms
pub const SWEEP_TRAIL_RAD: f32 = 0.5;

// Contact form
pub const SENT_INDICATOR_MS: i32 = 5000;

// Section dividers
pub const DIVIDER_SONAR_RINGS: usize = 4;
pub const DIVIDER_SONAR_BASE_PX: f32 = 200.0;
pub const DIVIDER_SONAR_STEP_PX: f32 = 80.0;
pub const DIVIDER_BUBBLES: usize = 12;
pub const DIVIDER_DEPTH_TICKS: usize = 20;
pub const DIVIDER_DEPTH_MAJOR_EVERY: usize = 5;
pub const DIVIDER_SIGNAL_WIDTH: u32 = 1000;
pub const DIVIDER_SIGNAL_HALF_WAVE: u32 = 100;

// Background and hero sonar
pub const HERO_RINGS: usize = 4;
pub const BACKGROUND_PRIMARY_PULSES: usize = 3;
pub const BACKGROUND_ACCENT_PULSES: usize = 2;
pub const BACKGROUND_SPECKS: usize = 20;
pub const BACKGROUND_BUBBLE_COLUMNS: usize = 6;
