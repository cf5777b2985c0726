//! Payment-gateway glue: loads the checkout script on demand and opens
//! the widget through its window-global constructor.

use gloo_console::error;
use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlScriptElement;
use yew::html::Scope;

use common::error::ToolError;
use common::model::payment::{CheckoutConfirmation, PaymentOrder};
use common::model::plan::Plan;

use crate::config;
use crate::session::SessionUser;

use super::messages::Msg;
use super::state::Pricing;

const SCRIPT_SRC: &str = "https://checkout.razorpay.com/v1/checkout.js";
const GATEWAY_GLOBAL: &str = "Razorpay";

const SDK_LOAD_ERROR: &str = "Payment SDK failed to load. Check your connection.";
const WIDGET_ERROR: &str = "Failed to open the payment window. Please try again.";

fn gateway_constructor() -> Option<Function> {
    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str(GATEWAY_GLOBAL))
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
}

/// Injects the checkout script and waits for it to load. A no-op when the
/// gateway global is already present, so repeat purchases skip the fetch.
pub async fn ensure_script() -> Result<(), ToolError> {
    if gateway_constructor().is_some() {
        return Ok(());
    }
    let promise = Promise::new(&mut |resolve, reject| {
        let attached = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| {
                let script = document
                    .create_element("script")
                    .ok()?
                    .dyn_into::<HtmlScriptElement>()
                    .ok()?;
                script.set_src(SCRIPT_SRC);
                script.set_onload(Some(&resolve));
                script.set_onerror(Some(&reject));
                document.body()?.append_child(&script).ok()?;
                Some(())
            });
        if attached.is_none() {
            let _ = reject.call0(&JsValue::NULL);
        }
    });
    match JsFuture::from(promise).await {
        Ok(_) => Ok(()),
        Err(err) => {
            error!("checkout script failed to load", err);
            Err(ToolError::RequestFailed(SDK_LOAD_ERROR.to_string()))
        }
    }
}

/// Opens the checkout widget for a minted order. Completion and dismissal
/// re-enter the component through its message channel.
pub fn open_widget(
    order: &PaymentOrder,
    plan: &Plan,
    user: &SessionUser,
    link: &Scope<Pricing>,
) -> Result<(), ToolError> {
    let constructor =
        gateway_constructor().ok_or_else(|| ToolError::RequestFailed(SDK_LOAD_ERROR.to_string()))?;

    let options = Object::new();
    set(&options, "key", &JsValue::from_str(&config::payment_key()))?;
    set(&options, "amount", &JsValue::from_f64(order.amount as f64))?;
    set(&options, "currency", &JsValue::from_str(&order.currency))?;
    set(&options, "order_id", &JsValue::from_str(&order.id))?;
    set(&options, "name", &JsValue::from_str("ExtraHands"))?;
    set(
        &options,
        "description",
        &JsValue::from_str(&format!("{} ({} credits)", plan.name, plan.credits)),
    )?;

    let handler_link = link.clone();
    let handler = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
        handler_link.send_message(Msg::CheckoutCompleted(read_confirmation(&response)));
    });
    set(&options, "handler", handler.as_ref())?;

    let prefill = Object::new();
    set(&prefill, "name", &JsValue::from_str(user.display_name()))?;
    set(&prefill, "email", &JsValue::from_str(&user.email))?;
    set(&options, "prefill", &prefill)?;

    let dismiss_link = link.clone();
    let ondismiss =
        Closure::<dyn FnMut()>::new(move || dismiss_link.send_message(Msg::CheckoutDismissed));
    let modal = Object::new();
    set(&modal, "ondismiss", ondismiss.as_ref())?;
    set(&options, "modal", &modal)?;

    let theme = Object::new();
    set(&theme, "color", &JsValue::from_str("#6366f1"))?;
    set(&options, "theme", &theme)?;

    let widget = Reflect::construct(&constructor, &Array::of1(&options)).map_err(|err| {
        error!("gateway constructor threw", err);
        ToolError::RequestFailed(WIDGET_ERROR.to_string())
    })?;
    let open = Reflect::get(&widget, &JsValue::from_str("open"))
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
        .ok_or_else(|| ToolError::RequestFailed(WIDGET_ERROR.to_string()))?;
    open.call0(&widget).map_err(|err| {
        error!("widget open threw", err);
        ToolError::RequestFailed(WIDGET_ERROR.to_string())
    })?;

    // The widget owns the callbacks for the rest of the page's lifetime.
    handler.forget();
    ondismiss.forget();
    Ok(())
}

fn read_confirmation(response: &JsValue) -> Option<CheckoutConfirmation> {
    let field = |key: &str| {
        Reflect::get(response, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_string())
    };
    Some(CheckoutConfirmation {
        order_id: field("razorpay_order_id")?,
        payment_id: field("razorpay_payment_id")?,
        signature: field("razorpay_signature")?,
    })
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), ToolError> {
    match Reflect::set(target, &JsValue::from_str(key), value) {
        Ok(_) => Ok(()),
        Err(err) => {
            error!("failed to assemble checkout options", err);
            Err(ToolError::RequestFailed(WIDGET_ERROR.to_string()))
        }
    }
}
