use crate::constants::*;
use crate::core::constants::{PARTICLE_COUNT, PERISCOPE_RING_PERCENT, WAKE_BUBBLES};
use crate::core::effects::{spawn_particles, EffectFrame, Particle};
use crate::core::scroll::{depth_marker_positions, ScrollProgress};
use crate::core::toast::ToastSlot;
use crate::dom;
use rand::SeedableRng;
use std::cell::RefCell;
use wasm_bindgen::JsValue;
use web_sys as web;

struct TorpedoLayer {
    root: web::HtmlElement,
    trail: web::HtmlElement,
    head: web::HtmlElement,
    second_trail: web::HtmlElement,
    second_head: web::HtmlElement,
    wake: Vec<web::HtmlElement>,
    label: web::HtmlElement,
}

/// Fixed, pointer-transparent layers behind the page content.
pub struct EffectsLayer {
    particles: Vec<(web::HtmlElement, Particle)>,
    rays_root: web::HtmlElement,
    rays: Vec<web::HtmlElement>,
    pressure: web::HtmlElement,
    scan_line: web::HtmlElement,
    torpedo: TorpedoLayer,
    periscope: web::HtmlElement,
    ambient: web::HtmlElement,
}

impl EffectsLayer {
    /// Build the layer under `#scroll-effects`. Returns `Ok(None)` when the
    /// page has no such root.
    pub fn mount(document: &web::Document) -> Result<Option<Self>, JsValue> {
        let Some(root) = document.get_element_by_id(EFFECTS_ROOT_ID) else {
            log::warn!("[scroll] #{} missing; effects disabled", EFFECTS_ROOT_ID);
            return Ok(None);
        };

        let mut rng = rand::rngs::StdRng::from_entropy();
        let mut particles = Vec::with_capacity(PARTICLE_COUNT);
        for p in spawn_particles(&mut rng, PARTICLE_COUNT) {
            let el = dom::append_div(document, &root, "fx-particle")?;
            dom::set_style(&el, "left", &format!("{:.2}%", p.x));
            dom::set_style(&el, "width", &format!("{:.2}px", p.size));
            dom::set_style(&el, "height", &format!("{:.2}px", p.size));
            particles.push((el, p));
        }

        let rays_root = dom::append_div(document, &root, "fx-rays")?;
        let mut rays = Vec::new();
        for _ in 0..4 {
            rays.push(dom::append_div(document, &rays_root, "fx-ray")?);
        }
        let pressure = dom::append_div(document, &root, "fx-pressure")?;
        let scan_line = dom::append_div(document, &root, "fx-scan-line")?;

        let t_root = dom::append_div(document, &root, "fx-torpedo")?;
        let torpedo = TorpedoLayer {
            trail: dom::append_div(document, &t_root, "fx-torpedo-trail")?,
            head: dom::append_div(document, &t_root, "fx-torpedo-head")?,
            second_trail: dom::append_div(document, &t_root, "fx-torpedo-trail second")?,
            second_head: dom::append_div(document, &t_root, "fx-torpedo-head second")?,
            wake: (0..WAKE_BUBBLES)
                .map(|_| dom::append_div(document, &t_root, "fx-wake"))
                .collect::<Result<_, _>>()?,
            label: dom::append_div(document, &t_root, "fx-torpedo-label")?,
            root: t_root,
        };
        dom::set_text(&torpedo.label, "▶ TORPEDO LAUNCHED");

        let periscope = dom::append_div(document, &root, "fx-periscope")?;
        dom::append_div(document, &periscope, "fx-periscope-vignette")?;
        dom::append_div(document, &periscope, "fx-periscope-h")?;
        dom::append_div(document, &periscope, "fx-periscope-v")?;
        for r in PERISCOPE_RING_PERCENT {
            let ring = dom::append_div(document, &periscope, "fx-periscope-ring")?;
            dom::set_style(&ring, "width", &format!("{}%", r));
            dom::set_style(&ring, "height", &format!("{}%", r));
            dom::set_style(&ring, "top", &format!("{}%", 50.0 - r / 2.0));
            dom::set_style(&ring, "left", &format!("{}%", 50.0 - r / 2.0));
        }
        for (class, text) in [
            ("fx-bearing n", "000°"),
            ("fx-bearing s", "180°"),
            ("fx-bearing w", "270°"),
            ("fx-bearing e", "090°"),
            ("fx-periscope-label", "ATTACK PERISCOPE — MARK"),
        ] {
            let el = dom::append_div(document, &periscope, class)?;
            dom::set_text(&el, text);
        }

        let ambient = dom::append_div(document, &root, "fx-ambient")?;

        log::info!("[scroll] effects layer mounted ({} particles)", particles.len());
        Ok(Some(Self {
            particles,
            rays_root,
            rays,
            pressure,
            scan_line,
            torpedo,
            periscope,
            ambient,
        }))
    }

    pub fn apply(&self, frame: &EffectFrame, scroll_y: f64) {
        for (el, p) in &self.particles {
            dom::set_style(el, "top", &format!("{:.2}%", p.top_percent(scroll_y)));
        }

        dom::set_visible(&self.rays_root, !frame.rays.is_empty());
        for (el, ray) in self.rays.iter().zip(frame.rays.iter()) {
            dom::set_style(el, "left", &format!("{}%", ray.left_percent));
            dom::set_style(el, "opacity", &format!("{:.4}", frame.ray_opacity));
            dom::set_style(
                el,
                "transform",
                &format!(
                    "rotate({}deg) translateY({:.1}px)",
                    ray.rotation_deg, ray.translate_y_px
                ),
            );
        }

        dom::set_style(&self.pressure, "opacity", &format!("{:.4}", frame.pressure));
        dom::set_style(&self.scan_line, "top", &format!("{:.2}%", frame.scan_line_top));

        self.apply_torpedo(frame);

        dom::set_visible(&self.periscope, frame.periscope > 0.0);
        dom::set_style(&self.periscope, "opacity", &format!("{:.4}", frame.periscope));

        dom::set_style(&self.ambient, "opacity", &format!("{:.4}", frame.ambient));
    }

    fn apply_torpedo(&self, frame: &EffectFrame) {
        let t = &self.torpedo;
        let Some(tf) = &frame.torpedo else {
            dom::set_visible(&t.root, false);
            return;
        };
        dom::set_visible(&t.root, true);
        dom::set_style(&t.root, "opacity", &format!("{:.3}", tf.intensity));
        dom::set_style(&t.trail, "width", &format!("{:.2}%", tf.trail_width_percent));
        dom::set_style(&t.head, "left", &format!("{:.2}%", tf.head_left_percent));
        dom::set_style(
            &t.second_trail,
            "width",
            &format!("{:.2}%", tf.second_trail_width_percent),
        );
        dom::set_style(
            &t.second_head,
            "left",
            &format!("{:.2}%", tf.second_head_left_percent),
        );
        dom::set_style(
            &t.second_head,
            "opacity",
            if tf.second_visible { "1" } else { "0" },
        );
        for (i, el) in t.wake.iter().enumerate() {
            match tf.wake.iter().find(|b| b.index == i) {
                Some(b) => {
                    dom::set_visible(el, true);
                    dom::set_style(el, "left", &format!("{:.2}%", b.left_percent));
                    dom::set_style(el, "top", &format!("{:.2}%", b.top_percent));
                    dom::set_style(el, "width", &format!("{:.1}px", b.size_px));
                    dom::set_style(el, "height", &format!("{:.1}px", b.size_px));
                    dom::set_style(el, "opacity", &format!("{:.3}", b.opacity));
                }
                None => dom::set_visible(el, false),
            }
        }
        dom::set_visible(&t.label, tf.show_launch_label);
    }
}

/// Side gauge showing depth in meters. Every element is optional.
pub struct DepthMeter {
    fill: Option<web::HtmlElement>,
    indicator: Option<web::HtmlElement>,
    readout: Option<web::HtmlElement>,
    zone: Option<web::HtmlElement>,
    warning: Option<web::HtmlElement>,
}

impl DepthMeter {
    pub fn mount(document: &web::Document) -> Self {
        if let Some(markers) = document.get_element_by_id(DEPTH_MARKERS_ID) {
            for (m, top) in depth_marker_positions() {
                if let Ok(el) = dom::append_div(document, &markers, "depth-marker") {
                    dom::set_style(&el, "top", &format!("{:.2}%", top));
                    dom::set_text(&el, &m.to_string());
                }
            }
        }
        Self {
            fill: dom::html_by_id(document, DEPTH_FILL_ID),
            indicator: dom::html_by_id(document, DEPTH_INDICATOR_ID),
            readout: dom::html_by_id(document, DEPTH_READOUT_ID),
            zone: dom::html_by_id(document, DEPTH_ZONE_ID),
            warning: dom::html_by_id(document, DEPTH_WARNING_ID),
        }
    }

    pub fn apply(&self, progress: ScrollProgress) {
        let pct = format!("{:.2}%", progress.percent());
        if let Some(el) = &self.fill {
            dom::set_style(el, "height", &pct);
        }
        if let Some(el) = &self.indicator {
            dom::set_style(el, "top", &pct);
        }
        if let Some(el) = &self.readout {
            dom::set_text(el, &progress.depth_readout());
        }
        if let Some(el) = &self.zone {
            dom::set_text(el, progress.zone().label());
        }
        if let Some(el) = &self.warning {
            dom::set_visible(el, progress.pressure_warning());
        }
    }
}

thread_local! {
    static TOAST: RefCell<ToastSlot> = RefCell::new(ToastSlot::default());
}

/// Transient notification in the corner. A newer message replaces an older
/// one and restarts the hide timer.
pub fn show_toast(document: &web::Document, text: &str, is_error: bool) {
    let Some(el) = dom::html_by_id(document, TOAST_ID) else {
        return;
    };
    dom::set_text(&el, text);
    dom::set_class(&el, "error", is_error);
    dom::set_class(&el, "visible", true);
    let token = TOAST.with(|t| t.borrow_mut().show());
    dom::set_timeout(TOAST_VISIBLE_MS, move || {
        if TOAST.with(|t| t.borrow_mut().expire(token)) {
            dom::set_class(&el, "visible", false);
        }
    });
}
