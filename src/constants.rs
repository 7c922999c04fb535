/// DOM hooks and browser-side timings.
///
/// Element ids match `index.html`. Any id that is missing from the page turns
/// the matching feature into a no-op instead of an error.
// Fixed layers
pub const EFFECTS_ROOT_ID: &str = "scroll-effects";
pub const CROSSHAIR_ROOT_ID: &str = "crosshair";

// Depth meter
pub const DEPTH_FILL_ID: &str = "depth-fill";
pub const DEPTH_INDICATOR_ID: &str = "depth-indicator";
pub const DEPTH_READOUT_ID: &str = "depth-readout";
pub const DEPTH_ZONE_ID: &str = "depth-zone";
pub const DEPTH_WARNING_ID: &str = "depth-warning";
pub const DEPTH_MARKERS_ID: &str = "depth-markers";

// Navigation
pub const NAV_ID: &str = "site-nav";
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_LINK_SELECTOR: &str = "a[data-section]";
pub const NAV_SCROLL_DELAY_MS: i32 = 100;

// Skills and tactical map containers
pub const RADAR_CONTAINER_ID: &str = "frontend-radar";
pub const SKILL_BARS_ID: &str = "frontend-bars";
pub const GAUGE_CONTAINER_ID: &str = "backend-gauges";
pub const TACTICAL_CONTAINER_ID: &str = "tactical-map";
pub const TACTICAL_SECTION_ID: &str = "tactical";
pub const SWEEP_WEDGE_ID: &str = "sweep-wedge";
pub const SWEEP_LINE_ID: &str = "sweep-line";

// Showcase content and decoration
pub const MISSION_LOG_ID: &str = "mission-log";
pub const PROJECT_LIST_ID: &str = "project-list";
pub const BACKDROP_ID: &str = "sonar-backdrop";
pub const HERO_SONAR_ID: &str = "hero-sonar";
pub const DIVIDER_SELECTOR: &str = "[data-divider]";
pub const DIVIDER_ATTR: &str = "data-divider";

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_SUBMIT_ID: &str = "contact-submit";
pub const CONTACT_NAME_ID: &str = "contact-name";
pub const CONTACT_EMAIL_ID: &str = "contact-email";
pub const CONTACT_MESSAGE_ID: &str = "contact-message";
pub const TOAST_ID: &str = "toast";
pub const TOAST_VISIBLE_MS: i32 = 4000;

// Section visibility for title updates and the tactical sweep
pub const SECTION_VISIBLE_THRESHOLD: f64 = 0.3;
