//! Runtime configuration, injected by the hosting page as a window-global
//! `EXTRAHANDS_CONFIG` object: `apiUrl` (backend base URL) and
//! `paymentKey` (gateway public key id). Missing keys fall back to the
//! same-origin default and an empty key.

use js_sys::Reflect;
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "EXTRAHANDS_CONFIG";

fn config_value(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).ok()?;
    if config.is_undefined() || config.is_null() {
        return None;
    }
    Reflect::get(&config, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}

/// Joins the configured backend base URL with an absolute API path.
/// With no configured base the path is used as-is (same origin).
pub fn api_url(path: &str) -> String {
    match config_value("apiUrl") {
        Some(base) => format!("{}{}", base.trim_end_matches('/'), path),
        None => path.to_string(),
    }
}

/// Public key id for the payment gateway's checkout widget.
pub fn payment_key() -> String {
    config_value("paymentKey").unwrap_or_default()
}
