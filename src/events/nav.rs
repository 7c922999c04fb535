use crate::constants::{NAV_ID, NAV_LINK_SELECTOR, NAV_SCROLL_DELAY_MS, NAV_TOGGLE_ID};
use crate::core::scroll::section_scroll_target;
use crate::dom::{self, Listener};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Smooth-scroll to `#id`, leaving room for the fixed header. Missing
/// sections are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(window) = web::window() else {
        return;
    };
    let Some(el) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        log::debug!("[nav] no section #{}", id);
        return;
    };
    let top = el.get_bounding_client_rect().top();
    let offset = window.page_y_offset().unwrap_or(0.0);
    let opts = web::ScrollToOptions::new();
    opts.set_top(section_scroll_target(top, offset));
    opts.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

fn close_menu(document: &web::Document) {
    if let Some(nav) = document.get_element_by_id(NAV_ID) {
        dom::set_class(&nav, "menu-open", false);
    }
}

/// Links carry `data-section="<id>"`. The scroll waits briefly so the mobile
/// menu can collapse first.
pub fn wire_nav(document: &web::Document) -> Result<Vec<Listener>, JsValue> {
    let mut listeners = Vec::new();

    let links = document.query_selector_all(NAV_LINK_SELECTOR)?;
    for i in 0..links.length() {
        let Some(link) = links.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let Some(section) = link.get_attribute("data-section") else {
            continue;
        };
        let doc = document.clone();
        listeners.push(Listener::new(&link, "click", move |ev: web::Event| {
            ev.prevent_default();
            ev.stop_propagation();
            close_menu(&doc);
            let section = section.clone();
            dom::set_timeout(NAV_SCROLL_DELAY_MS, move || scroll_to_section(&section));
        })?);
    }

    if let Some(toggle) = document.get_element_by_id(NAV_TOGGLE_ID) {
        let doc = document.clone();
        listeners.push(Listener::new(&toggle, "click", move |_ev: web::Event| {
            if let Some(nav) = doc.get_element_by_id(NAV_ID) {
                _ = nav.class_list().toggle("menu-open");
            }
        })?);
    }

    Ok(listeners)
}
