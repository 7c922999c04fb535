use crate::core::cursor::CursorState;
use crate::dom::Listener;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Raw pointer input shared with the frame loop.
#[derive(Clone)]
pub struct PointerWiring {
    pub cursor: Rc<RefCell<CursorState>>,
    pub raw_x: Rc<Cell<f32>>,
    pub header_height: Rc<Cell<f32>>,
}

pub fn measure_header(document: &web::Document) -> Option<f32> {
    let header = document
        .query_selector("header")
        .ok()
        .flatten()
        .or_else(|| document.query_selector("nav").ok().flatten())?;
    Some(header.get_bounding_client_rect().height() as f32)
}

pub fn wire_pointer(window: &web::Window, w: &PointerWiring) -> Result<Vec<Listener>, JsValue> {
    let mut listeners = Vec::with_capacity(2);

    let cursor = w.cursor.clone();
    let raw_x = w.raw_x.clone();
    listeners.push(Listener::new(window, "mousemove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
        cursor.borrow_mut().set_target(x, y);
        raw_x.set(x);
    })?);

    if let Some(document) = window.document() {
        if let Some(h) = measure_header(&document) {
            w.header_height.set(h);
        }
        let header_height = w.header_height.clone();
        listeners.push(Listener::new(window, "resize", move |_ev: web::Event| {
            if let Some(h) = measure_header(&document) {
                header_height.set(h);
            }
        })?);
    }

    Ok(listeners)
}
