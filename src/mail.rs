use crate::core::contact::ContactValues;
use crate::core::mail::{MailRelayConfig, RelayError, RelayRequest, RELAY_ENDPOINT};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn js_err(e: JsValue) -> RelayError {
    RelayError::Transport(format!("{:?}", e))
}

/// POST the form contents to the mail relay. Resolves once the relay has
/// answered; any non-2xx status is a `Rejected` error.
pub async fn send(config: &MailRelayConfig, values: &ContactValues) -> Result<(), RelayError> {
    let body = RelayRequest::new(config, values).to_json()?;

    let window = web::window().ok_or_else(|| RelayError::Transport("no window".into()))?;
    let headers = web::Headers::new().map_err(js_err)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_err)?;

    let opts = web::RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(web::RequestMode::Cors);
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&body));

    let request = web::Request::new_with_str_and_init(RELAY_ENDPOINT, &opts).map_err(js_err)?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into::<web::Response>()
        .map_err(js_err)?;

    if response.ok() {
        log::info!("[mail] relay accepted message (status {})", response.status());
        return Ok(());
    }
    let status = response.status();
    let body = match response.text() {
        Ok(p) => JsFuture::from(p)
            .await
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };
    Err(RelayError::Rejected { status, body })
}
