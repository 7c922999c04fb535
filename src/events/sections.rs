use crate::constants::{
    DIVIDER_ATTR, DIVIDER_SELECTOR, SECTION_VISIBLE_THRESHOLD, TACTICAL_SECTION_ID,
};
use crate::core::title::{title_for_section, TitleState, SECTIONS};
use crate::dom::{self, Listener};
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Intersection observer over the page sections. Disconnects on drop.
pub struct SectionObserver {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Watch the titled sections, the tactical map and the section dividers.
/// Titles follow the section in view and sections are marked `revealed` the
/// first time they show up. `tactical_visible` gates the sweep animation.
/// Dividers carry `in-view` only while intersecting so their animation
/// replays.
pub fn observe_sections(
    document: &web::Document,
    title: Rc<RefCell<TitleState>>,
    tactical_visible: Rc<Cell<bool>>,
) -> Result<SectionObserver, JsValue> {
    let doc = document.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _obs: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                if target.has_attribute(DIVIDER_ATTR) {
                    dom::set_class(&target, "in-view", entry.is_intersecting());
                    continue;
                }
                if entry.is_intersecting() {
                    dom::set_class(&target, "revealed", true);
                }
                let id = target.id();
                if id == TACTICAL_SECTION_ID {
                    tactical_visible.set(entry.is_intersecting());
                    continue;
                }
                if !entry.is_intersecting() {
                    continue;
                }
                if let Some(t) = title_for_section(&id) {
                    if let Some(now) = title.borrow_mut().on_section(t) {
                        doc.set_title(&now);
                    }
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(SECTION_VISIBLE_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

    let ids = SECTIONS
        .iter()
        .map(|(id, _)| *id)
        .chain(std::iter::once(TACTICAL_SECTION_ID));
    for id in ids {
        match document.get_element_by_id(id) {
            Some(el) => observer.observe(&el),
            None => log::debug!("[title] section #{} not on page", id),
        }
    }

    let bands = document.query_selector_all(DIVIDER_SELECTOR)?;
    for i in 0..bands.length() {
        if let Some(el) = bands.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
            observer.observe(&el);
        }
    }

    Ok(SectionObserver {
        observer,
        _callback: callback,
    })
}

/// Swap in an idle message while the tab is hidden, restore on return.
pub fn wire_visibility(
    document: &web::Document,
    title: Rc<RefCell<TitleState>>,
) -> Result<Listener, JsValue> {
    let doc = document.clone();
    let mut rng = rand::rngs::StdRng::from_entropy();
    Listener::new(document, "visibilitychange", move |_ev: web::Event| {
        if doc.hidden() {
            let away = title.borrow_mut().on_hidden(&doc.title(), &mut rng);
            doc.set_title(away);
        } else if let Some(saved) = title.borrow_mut().on_visible() {
            doc.set_title(&saved);
        }
    })
}
