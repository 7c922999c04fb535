use crate::constants::{CROSSHAIR_ROOT_ID, SWEEP_LINE_ID, SWEEP_WEDGE_ID};
use crate::core::cursor::{bearing_deg, bearing_readout, CursorState};
use crate::core::tactical::{MapGeometry, SweepState};
use crate::dom;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Crosshair {
    horizontal: web::HtmlElement,
    vertical: web::HtmlElement,
    reticle: web::HtmlElement,
    dot: web::HtmlElement,
    bearing: web::HtmlElement,
}

impl Crosshair {
    fn mount(document: &web::Document) -> Option<Self> {
        let root = document.get_element_by_id(CROSSHAIR_ROOT_ID)?;
        let part = |class: &str| dom::append_div(document, &root, class).ok();
        Some(Self {
            horizontal: part("crosshair-h")?,
            vertical: part("crosshair-v")?,
            reticle: part("crosshair-reticle")?,
            dot: part("crosshair-dot")?,
            bearing: part("crosshair-bearing")?,
        })
    }
}

pub struct FrameContext {
    pub window: web::Window,
    pub cursor: Rc<RefCell<CursorState>>,
    pub raw_x: Rc<Cell<f32>>,
    pub header_height: Rc<Cell<f32>>,
    pub tactical_visible: Rc<Cell<bool>>,
    pub sweep: SweepState,
    pub map: MapGeometry,
    pub last_instant: Instant,
    crosshair: Option<Crosshair>,
    sweep_wedge: Option<web::Element>,
    sweep_line: Option<web::Element>,
}

impl FrameContext {
    pub fn new(
        window: web::Window,
        document: &web::Document,
        cursor: Rc<RefCell<CursorState>>,
        raw_x: Rc<Cell<f32>>,
        header_height: Rc<Cell<f32>>,
        tactical_visible: Rc<Cell<bool>>,
    ) -> Self {
        Self {
            window,
            cursor,
            raw_x,
            header_height,
            tactical_visible,
            sweep: SweepState::default(),
            map: MapGeometry::default(),
            last_instant: Instant::now(),
            crosshair: Crosshair::mount(document),
            sweep_wedge: document.get_element_by_id(SWEEP_WEDGE_ID),
            sweep_line: document.get_element_by_id(SWEEP_LINE_ID),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let (vw, vh) = dom::viewport_size(&self.window);
        self.cursor.borrow_mut().step();
        self.draw_crosshair(vw as f32, vh as f32);

        if self.tactical_visible.get() {
            self.sweep.advance(dt_sec);
            self.draw_sweep();
        }
    }

    fn draw_crosshair(&self, vw: f32, vh: f32) {
        let Some(c) = &self.crosshair else {
            return;
        };
        let cursor = *self.cursor.borrow();
        let header = self.header_height.get();
        let x = cursor.pos.x;
        let y = cursor.clamped_y(header);
        let xp = cursor.x_percent(vw);
        let yp = if vh > header {
            (y - header) / (vh - header) * 100.0
        } else {
            0.0
        };

        dom::set_style(&c.horizontal, "top", &format!("{:.1}px", y - 0.5));
        dom::set_style(
            &c.horizontal,
            "background",
            &format!(
                "linear-gradient(90deg, transparent, var(--crosshair-faint) {:.1}%, var(--crosshair-mid) {:.1}%, var(--crosshair-strong) {:.1}%, var(--crosshair-mid) {:.1}%, var(--crosshair-faint) {:.1}%, transparent)",
                xp - 35.0,
                xp - 5.0,
                xp,
                xp + 5.0,
                xp + 35.0
            ),
        );
        dom::set_style(&c.vertical, "left", &format!("{:.1}px", x - 0.5));
        dom::set_style(&c.vertical, "top", &format!("{:.1}px", header));
        dom::set_style(
            &c.vertical,
            "background",
            &format!(
                "linear-gradient(180deg, transparent, var(--crosshair-faint) 10%, var(--crosshair-mid) 40%, var(--crosshair-strong) {:.1}%, var(--crosshair-faint) 90%, transparent)",
                yp
            ),
        );
        for el in [&c.reticle, &c.dot] {
            dom::set_style(el, "left", &format!("{:.1}px", x));
            dom::set_style(el, "top", &format!("{:.1}px", y));
        }
        dom::set_style(&c.bearing, "left", &format!("{:.1}px", x + 14.0));
        dom::set_style(&c.bearing, "top", &format!("{:.1}px", y + 10.0));
        dom::set_text(
            &c.bearing,
            &bearing_readout(bearing_deg(self.raw_x.get(), vw)),
        );
    }

    fn draw_sweep(&self) {
        let angle = self.sweep.angle_deg;
        if let Some(w) = &self.sweep_wedge {
            _ = w.set_attribute("d", &self.map.sweep_wedge_path(angle));
        }
        if let Some(l) = &self.sweep_line {
            let tip = self.map.sweep_tip(angle);
            _ = l.set_attribute("x2", &format!("{:.1}", tip.x));
            _ = l.set_attribute("y2", &format!("{:.1}", tip.y));
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running `requestAnimationFrame` loop. Dropping it cancels the pending
/// frame and releases the callback.
pub struct FrameLoop {
    tick: TickSlot,
    handle: Rc<Cell<Option<i32>>>,
}

fn request(tick: &TickSlot) -> Option<i32> {
    let window = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let handle = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let handle_clone = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        handle_clone.set(request(&tick_clone));
    }) as Box<dyn FnMut()>));

    handle.set(request(&tick));
    log::info!("[frame] animation loop started");
    FrameLoop { tick, handle }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // breaks the closure -> slot reference cycle
        self.tick.borrow_mut().take();
        log::info!("[frame] animation loop stopped");
    }
}
