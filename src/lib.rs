#![cfg(target_arch = "wasm32")]
use crate::core::{ContactForm, CursorState, MailRelayConfig, TitleState};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod content;
mod core;
mod dom;
mod events;
mod frame;
mod mail;
mod overlay;
mod render;
mod svg;

/// Everything registered for the lifetime of the page. Dropping it releases
/// every listener, the section observer and the animation frame.
struct Page {
    _listeners: Vec<dom::Listener>,
    _sections: Option<events::sections::SectionObserver>,
    _frame: frame::FrameLoop,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sonar-portfolio starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Tear the page down: unregister listeners and stop the frame loop.
#[wasm_bindgen]
pub fn shutdown() {
    let page = PAGE.with(|p| p.borrow_mut().take());
    if page.is_some() {
        drop(page);
        STARTED.store(false, Ordering::SeqCst);
        log::info!("sonar-portfolio stopped");
    }
}

static STARTED: AtomicBool = AtomicBool::new(false);

fn init() -> anyhow::Result<()> {
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let js = |e: JsValue| anyhow::anyhow!("{:?}", e);

    render::render_static(&document);

    let mut listeners = Vec::new();

    // Scroll-driven layers
    let view = Rc::new(events::scroll::ScrollView {
        effects: overlay::EffectsLayer::mount(&document).map_err(js)?,
        depth: overlay::DepthMeter::mount(&document),
        nav: document.get_element_by_id(constants::NAV_ID),
    });
    listeners.extend(events::scroll::wire_scroll(&window, view).map_err(js)?);
    listeners.extend(events::nav::wire_nav(&document).map_err(js)?);

    // Title + tactical visibility
    let title = Rc::new(RefCell::new(TitleState::default()));
    let tactical_visible = Rc::new(Cell::new(false));
    let sections =
        match events::sections::observe_sections(&document, title.clone(), tactical_visible.clone())
        {
            Ok(obs) => {
                // reveal animations only hide content once something will show it
                if let Some(root) = document.document_element() {
                    dom::set_class(&root, "observing", true);
                }
                Some(obs)
            }
            Err(e) => {
                // without IntersectionObserver the sweep just runs all the time
                log::warn!("[title] section observer unavailable: {:?}", e);
                tactical_visible.set(true);
                None
            }
        };
    listeners.push(events::sections::wire_visibility(&document, title).map_err(js)?);

    // Contact form
    let relay = match MailRelayConfig::from_build_env() {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            log::warn!("[mail] {}", e);
            None
        }
    };
    let form = Rc::new(RefCell::new(ContactForm::new()));
    listeners.extend(events::contact::wire_contact_form(&document, form, relay).map_err(js)?);

    // Cursor crosshair + tactical sweep, driven per animation frame
    let pointer = events::pointer::PointerWiring {
        cursor: Rc::new(RefCell::new(CursorState::default())),
        raw_x: Rc::new(Cell::new(0.0)),
        header_height: Rc::new(Cell::new(0.0)),
    };
    listeners.extend(events::pointer::wire_pointer(&window, &pointer).map_err(js)?);
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        window.clone(),
        &document,
        pointer.cursor,
        pointer.raw_x,
        pointer.header_height,
        tactical_visible,
    )));
    let frame_loop = frame::start_loop(frame_ctx);

    log::info!("[init] {} listeners registered", listeners.len());
    PAGE.with(|p| {
        *p.borrow_mut() = Some(Page {
            _listeners: listeners,
            _sections: sections,
            _frame: frame_loop,
        })
    });
    Ok(())
}
