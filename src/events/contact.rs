use crate::constants::*;
use crate::core::constants::SENT_INDICATOR_MS;
use crate::core::contact::{ContactForm, Field, FieldState, Notice, SubmitAttempt, SubmitStatus};
use crate::core::mail::MailRelayConfig;
use crate::dom::{self, Listener};
use crate::mail;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

fn input_id(field: Field) -> &'static str {
    match field {
        Field::Name => CONTACT_NAME_ID,
        Field::Email => CONTACT_EMAIL_ID,
        Field::Message => CONTACT_MESSAGE_ID,
    }
}

fn read_value(document: &web::Document, field: Field) -> String {
    let Some(el) = document.get_element_by_id(input_id(field)) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn write_value(document: &web::Document, field: Field, value: &str) {
    let Some(el) = document.get_element_by_id(input_id(field)) else {
        return;
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

/// Inline error slot is `#<input-id>-error`.
fn render_field(document: &web::Document, field: Field, state: FieldState) {
    let id = input_id(field);
    if let Some(input) = document.get_element_by_id(id) {
        dom::set_class(&input, "invalid", state.error().is_some());
        dom::set_class(&input, "valid", state == FieldState::Valid);
        _ = input.set_attribute(
            "aria-invalid",
            if state.error().is_some() { "true" } else { "false" },
        );
    }
    if let Some(slot) = document.get_element_by_id(&format!("{}-error", id)) {
        let msg = state.error().map(|e| e.to_string()).unwrap_or_default();
        dom::set_text(&slot, &msg);
    }
}

fn render_status(document: &web::Document, form: &ContactForm) {
    let Some(btn) = document.get_element_by_id(CONTACT_SUBMIT_ID) else {
        return;
    };
    if let Some(b) = btn.dyn_ref::<web::HtmlButtonElement>() {
        b.set_disabled(form.is_sending());
    }
    let label = match form.status() {
        SubmitStatus::Idle => "SEND TRANSMISSION",
        SubmitStatus::Sending => "TRANSMITTING...",
        SubmitStatus::Sent { .. } => "TRANSMISSION SENT",
    };
    dom::set_text(&btn, label);
    dom::set_class(&btn, "sent", form.is_sent());
}

fn render_all(document: &web::Document, form: &ContactForm) {
    for f in Field::ALL {
        render_field(document, f, form.field(f));
    }
    render_status(document, form);
}

fn submit(document: web::Document, form: Rc<RefCell<ContactForm>>, relay: Option<MailRelayConfig>) {
    for f in Field::ALL {
        let v = read_value(&document, f);
        form.borrow_mut().values.set(f, &v);
    }
    let attempt = form.borrow_mut().submit();
    render_all(&document, &form.borrow());

    let values = match attempt {
        SubmitAttempt::Ready(values) => values,
        SubmitAttempt::InFlight => return,
        SubmitAttempt::Blocked(errors) => {
            log::info!("[contact] submit blocked: {} field error(s)", errors.len());
            return;
        }
    };

    spawn_local(async move {
        let result = match &relay {
            Some(cfg) => mail::send(cfg, &values).await,
            None => Err(crate::core::RelayError::Unconfigured),
        };
        let notice = match result {
            Ok(()) => {
                let (notice, token) = form.borrow_mut().complete_success();
                for f in Field::ALL {
                    write_value(&document, f, "");
                }
                let form_t = form.clone();
                let doc_t = document.clone();
                dom::set_timeout(SENT_INDICATOR_MS, move || {
                    if form_t.borrow_mut().expire_sent(token) {
                        render_status(&doc_t, &form_t.borrow());
                    }
                });
                notice
            }
            Err(e) => {
                log::error!("[contact] transmission failed: {}", e);
                form.borrow_mut().complete_failure()
            }
        };
        render_all(&document, &form.borrow());
        overlay::show_toast(&document, notice.text(), notice == Notice::Failure);
    });
}

/// Wire blur/change/input on each field and submit on the form.
pub fn wire_contact_form(
    document: &web::Document,
    form: Rc<RefCell<ContactForm>>,
    relay: Option<MailRelayConfig>,
) -> Result<Vec<Listener>, JsValue> {
    let mut listeners = Vec::new();

    for field in Field::ALL {
        let Some(el) = document.get_element_by_id(input_id(field)) else {
            continue;
        };
        for event in ["blur", "change", "input"] {
            let doc = document.clone();
            let form = form.clone();
            listeners.push(Listener::new(&el, event, move |_ev: web::Event| {
                let value = read_value(&doc, field);
                let state = match event {
                    "input" => form.borrow_mut().on_input(field, &value),
                    "change" => form.borrow_mut().on_change(field, &value),
                    _ => form.borrow_mut().on_blur(field, &value),
                };
                render_field(&doc, field, state);
            })?);
        }
    }

    if let Some(form_el) = document.get_element_by_id(CONTACT_FORM_ID) {
        let doc = document.clone();
        listeners.push(Listener::new(&form_el, "submit", move |ev: web::Event| {
            ev.prevent_default();
            submit(doc.clone(), form.clone(), relay.clone());
        })?);
    } else {
        log::warn!("[contact] #{} missing; form disabled", CONTACT_FORM_ID);
    }

    Ok(listeners)
}
