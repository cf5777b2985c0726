//! Typed facade over the external auth provider's browser SDK.
//!
//! The provider's loader script exposes a window-global `EXTRAHANDS_AUTH`
//! object carrying the current session under `user` (`id`, `fullName`,
//! `firstName`, `lastName`, `email`, `imageUrl`) plus `openSignIn`,
//! `openSignUp`, and `signOut` methods. This module only reads identity;
//! session lifecycle is entirely the provider's. Sign-in completion
//! re-enters the app through a page reload driven by the provider.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use common::error::ToolError;

const AUTH_GLOBAL: &str = "EXTRAHANDS_AUTH";

/// Identity fields consumed from the provider's session object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub image_url: String,
}

impl SessionUser {
    /// Best display name available: full name, then first name, then the
    /// email address.
    pub fn display_name(&self) -> &str {
        if !self.full_name.is_empty() {
            &self.full_name
        } else if !self.first_name.is_empty() {
            &self.first_name
        } else {
            &self.email
        }
    }
}

fn auth_object() -> Option<JsValue> {
    let window = web_sys::window()?;
    let auth = Reflect::get(&window, &JsValue::from_str(AUTH_GLOBAL)).ok()?;
    (!auth.is_undefined() && !auth.is_null()).then_some(auth)
}

fn string_field(obj: &JsValue, key: &str) -> Option<String> {
    Reflect::get(obj, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}

/// Current signed-in identity, if any. `id` is the only required field;
/// display fields degrade to empty strings.
pub fn current_user() -> Option<SessionUser> {
    let auth = auth_object()?;
    let user = Reflect::get(&auth, &JsValue::from_str("user")).ok()?;
    if user.is_undefined() || user.is_null() {
        return None;
    }
    let id = string_field(&user, "id")?;
    Some(SessionUser {
        id,
        full_name: string_field(&user, "fullName").unwrap_or_default(),
        first_name: string_field(&user, "firstName").unwrap_or_default(),
        last_name: string_field(&user, "lastName").unwrap_or_default(),
        email: string_field(&user, "email").unwrap_or_default(),
        image_url: string_field(&user, "imageUrl").unwrap_or_default(),
    })
}

/// Identity precondition for a submission. Fails with `NotSignedIn`
/// carrying the screen's own call-to-action text; no network call is made.
pub fn require_user(sign_in_prompt: &str) -> Result<SessionUser, ToolError> {
    current_user().ok_or_else(|| ToolError::NotSignedIn(sign_in_prompt.to_string()))
}

fn invoke(method: &str) {
    if let Some(auth) = auth_object() {
        let method = Reflect::get(&auth, &JsValue::from_str(method))
            .ok()
            .and_then(|v| v.dyn_into::<Function>().ok());
        if let Some(f) = method {
            let _ = f.call0(&auth);
        }
    }
}

pub fn open_sign_in() {
    invoke("openSignIn");
}

pub fn open_sign_up() {
    invoke("openSignUp");
}

pub fn sign_out() {
    invoke("signOut");
}
