use crate::constants::*;
use crate::content::{
    BACKEND_SKILLS, FRONTEND_SKILLS, MISSION_LOG, PROJECTS, ROUTE_WAYPOINTS, SONAR_CONTACTS,
};
use crate::core::radar::{Gauge, RadarGeometry};
use crate::core::showcase::{Backdrop, DividerKind};
use crate::core::tactical::MapGeometry;
use crate::svg;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use web_sys as web;

fn fill(document: &web::Document, id: &str, markup: &str) -> bool {
    match document.get_element_by_id(id) {
        Some(el) => {
            el.set_inner_html(markup);
            true
        }
        None => false,
    }
}

/// Fill every `data-divider` band with the markup for its kind. Returns the
/// number of bands drawn.
fn render_dividers<R: rand::Rng>(document: &web::Document, rng: &mut R) -> usize {
    let Ok(bands) = document.query_selector_all(DIVIDER_SELECTOR) else {
        return 0;
    };
    let mut drawn = 0;
    for i in 0..bands.length() {
        let Some(el) = bands.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let attr = el.get_attribute(DIVIDER_ATTR).unwrap_or_default();
        let Some(kind) = DividerKind::from_attr(&attr) else {
            log::warn!("[render] unknown divider kind {:?}", attr);
            continue;
        };
        _ = el.class_list().add_2("divider", kind.css_class());
        el.set_inner_html(&svg::section_divider(kind, rng));
        drawn += 1;
    }
    drawn
}

/// Draw the skill charts, tactical map, timeline, project cards and the
/// decorative layers into their containers. Must run before the frame loop
/// looks up the sweep elements.
pub fn render_static(document: &web::Document) {
    let mut rng = rand::rngs::StdRng::from_entropy();
    let radar = svg::radar_chart(&FRONTEND_SKILLS, &RadarGeometry::default());
    let drawn = [
        fill(document, RADAR_CONTAINER_ID, &radar),
        fill(document, SKILL_BARS_ID, &svg::skill_bars(&FRONTEND_SKILLS)),
        fill(
            document,
            GAUGE_CONTAINER_ID,
            &svg::gauge_grid(&BACKEND_SKILLS, &Gauge::default()),
        ),
        fill(
            document,
            TACTICAL_CONTAINER_ID,
            &svg::tactical_map(&MapGeometry::default(), &ROUTE_WAYPOINTS, &SONAR_CONTACTS),
        ),
        fill(document, MISSION_LOG_ID, &svg::mission_timeline(&MISSION_LOG)),
        fill(document, PROJECT_LIST_ID, &svg::project_cards(&PROJECTS)),
        fill(
            document,
            BACKDROP_ID,
            &svg::sonar_backdrop(&Backdrop::generate(&mut rng)),
        ),
        fill(document, HERO_SONAR_ID, &svg::hero_sonar()),
    ];
    let count = drawn.iter().filter(|d| **d).count();
    let dividers = render_dividers(document, &mut rng);
    log::info!(
        "[render] static content drawn into {}/{} containers, {} dividers",
        count,
        drawn.len(),
        dividers
    );
}
