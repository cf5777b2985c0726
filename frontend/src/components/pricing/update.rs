//! Update function for the credit purchase screen: the purchase protocol's
//! state machine.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::ToolError;
use common::model::payment::{CreateOrderRequest, PaymentUserData, VerifyPaymentRequest};
use common::model::plan::PLANS;
use common::responses::{OrderResponse, VerifyResponse};

use crate::api;
use crate::credit_bus;
use crate::session;

use super::checkout;
use super::messages::Msg;
use super::state::{PaymentStatus, Pricing};

const ORDER_FALLBACK: &str = "Failed to start payment. Please try again.";
const VERIFY_FALLBACK: &str =
    "Payment verification failed. Please contact support if you were charged.";

pub fn update(component: &mut Pricing, ctx: &Context<Pricing>, msg: Msg) -> bool {
    match msg {
        Msg::Purchase(index) => {
            if component.busy() {
                return false;
            }
            if session::current_user().is_none() {
                session::open_sign_in();
                return false;
            }
            let Some(plan) = PLANS.get(index) else {
                return false;
            };
            component.pending_plan = Some(index);
            component.status = PaymentStatus::Preparing;
            let amount = plan.price;
            let link = ctx.link().clone();
            spawn_local(async move {
                if let Err(err) = checkout::ensure_script().await {
                    link.send_message(Msg::OrderReady(Err(err)));
                    return;
                }
                let outcome = api::post_json::<_, OrderResponse>(
                    "/api/payment/create-order",
                    &CreateOrderRequest { amount },
                    ORDER_FALLBACK,
                )
                .await
                .and_then(|response| {
                    response
                        .order
                        .ok_or_else(|| ToolError::RequestFailed(ORDER_FALLBACK.to_string()))
                });
                link.send_message(Msg::OrderReady(outcome));
            });
            true
        }
        Msg::OrderReady(Ok(order)) => {
            let plan = component.pending_plan.and_then(|i| PLANS.get(i));
            let user = session::current_user();
            match (plan, user) {
                (Some(plan), Some(user)) => {
                    match checkout::open_widget(&order, plan, &user, ctx.link()) {
                        Ok(()) => component.status = PaymentStatus::WidgetOpen,
                        Err(err) => component.status = PaymentStatus::Failed(err.to_string()),
                    }
                }
                _ => component.status = PaymentStatus::Failed(ORDER_FALLBACK.to_string()),
            }
            true
        }
        Msg::OrderReady(Err(err)) => {
            component.status = PaymentStatus::Failed(err.to_string());
            true
        }
        Msg::CheckoutCompleted(None) => {
            component.status = PaymentStatus::Failed(VERIFY_FALLBACK.to_string());
            true
        }
        Msg::CheckoutCompleted(Some(confirmation)) => {
            let plan = component.pending_plan.and_then(|i| PLANS.get(i));
            let user = session::current_user();
            let (Some(plan), Some(user)) = (plan, user) else {
                component.status = PaymentStatus::Failed(VERIFY_FALLBACK.to_string());
                return true;
            };
            component.status = PaymentStatus::Verifying;
            let request = VerifyPaymentRequest {
                razorpay_order_id: confirmation.order_id,
                razorpay_payment_id: confirmation.payment_id,
                razorpay_signature: confirmation.signature,
                clerk_id: user.id.clone(),
                credits: plan.credits,
                user_data: PaymentUserData {
                    email: user.email.clone(),
                    first_name: user.first_name.clone(),
                    last_name: user.last_name.clone(),
                    photo_url: user.image_url.clone(),
                },
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = api::post_json::<_, VerifyResponse>(
                    "/api/payment/verify",
                    &request,
                    VERIFY_FALLBACK,
                )
                .await
                .map(|_| ());
                link.send_message(Msg::Verified(outcome));
            });
            true
        }
        Msg::CheckoutDismissed => {
            // Dismissal after the completion callback is just the widget
            // closing itself; verification is already under way.
            if component.status == PaymentStatus::WidgetOpen {
                component.status = PaymentStatus::Cancelled;
                true
            } else {
                false
            }
        }
        Msg::Verified(Ok(())) => {
            let credits = component
                .pending_plan
                .and_then(|i| PLANS.get(i))
                .map(|plan| plan.credits)
                .unwrap_or_default();
            component.status = PaymentStatus::Success { credits };
            credit_bus::publish();
            true
        }
        Msg::Verified(Err(err)) => {
            component.status = PaymentStatus::Failed(err.to_string());
            true
        }
        Msg::ClearStatus => {
            component.status = PaymentStatus::Idle;
            component.pending_plan = None;
            true
        }
    }
}
