use crate::core::effects::EffectFrame;
use crate::core::scroll::{nav_is_scrolled, ScrollProgress};
use crate::dom::{self, Listener};
use crate::overlay::{DepthMeter, EffectsLayer};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Everything redrawn from the scroll position.
pub struct ScrollView {
    pub effects: Option<EffectsLayer>,
    pub depth: DepthMeter,
    pub nav: Option<web::Element>,
}

impl ScrollView {
    pub fn refresh(&self, window: &web::Window) {
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let progress = read_progress(window, scroll_y);
        if let Some(fx) = &self.effects {
            fx.apply(&EffectFrame::compute(progress, scroll_y), scroll_y);
        }
        self.depth.apply(progress);
        if let Some(nav) = &self.nav {
            dom::set_class(nav, "scrolled", nav_is_scrolled(scroll_y));
        }
    }
}

fn read_progress(window: &web::Window, scroll_y: f64) -> ScrollProgress {
    let doc_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    let (_, viewport_h) = dom::viewport_size(window);
    ScrollProgress::from_metrics(scroll_y, doc_height, viewport_h)
}

/// Passive scroll listener plus a resize listener, since the scrollable
/// height changes with the viewport.
pub fn wire_scroll(window: &web::Window, view: Rc<ScrollView>) -> Result<Vec<Listener>, JsValue> {
    view.refresh(window);

    let w = window.clone();
    let v = view.clone();
    let on_scroll = Listener::passive(window, "scroll", move |_ev: web::Event| {
        v.refresh(&w);
    })?;

    let w = window.clone();
    let on_resize = Listener::new(window, "resize", move |_ev: web::Event| {
        view.refresh(&w);
    })?;

    Ok(vec![on_scroll, on_resize])
}
