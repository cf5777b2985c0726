//! View rendering for the credit purchase screen.

use yew::html::Scope;
use yew::prelude::*;

use common::model::plan::{Plan, PLANS};

use crate::components::ui;

use super::messages::Msg;
use super::state::{PaymentStatus, Pricing};

pub fn view(component: &Pricing, ctx: &Context<Pricing>) -> Html {
    let link = ctx.link();
    html! {
        <div class="tool-page pricing">
            {
                ui::page_header(
                    "workspace_premium",
                    "Credits & Plans",
                    "Every generation, conversion, and check spends credits. Top up once, use anywhere.",
                )
            }
            <div class="plan-grid">
                {
                    for PLANS.iter().enumerate().map(|(index, plan)| {
                        build_plan_card(component, link, index, plan)
                    })
                }
            </div>
            { build_status(component, link) }
        </div>
    }
}

fn build_plan_card(component: &Pricing, link: &Scope<Pricing>, index: usize, plan: &Plan) -> Html {
    let busy_here = component.busy() && component.pending_plan == Some(index);
    let label = if busy_here { "Processing..." } else { "Buy Now" };
    let ribbon = if plan.popular {
        html! { <span class="ribbon">{ "Most Popular" }</span> }
    } else {
        Html::default()
    };
    html! {
        <div class={classes!("plan-card", plan.popular.then_some("popular"))}>
            { ribbon }
            <h2>{ plan.name }</h2>
            <p class="plan-description">{ plan.description }</p>
            <div class="plan-price">
                <span class="amount">{ format!("₹{}", plan.price) }</span>
                <span class="credits">{ format!("{} credits", plan.credits) }</span>
            </div>
            <ul class="plan-features">
                {
                    for plan.features.iter().map(|feature| html! {
                        <li><i class="material-icons">{ "check" }</i>{ *feature }</li>
                    })
                }
            </ul>
            <button
                class="btn btn-primary"
                disabled={component.busy()}
                onclick={link.callback(move |_| Msg::Purchase(index))}
            >
                { label }
            </button>
        </div>
    }
}

fn build_status(component: &Pricing, link: &Scope<Pricing>) -> Html {
    let dismiss = link.callback(|_| Msg::ClearStatus);
    match &component.status {
        PaymentStatus::Success { credits } => html! {
            <div class="modal-backdrop">
                <div class="modal payment-success">
                    <i class="material-icons">{ "check_circle" }</i>
                    <h2>{ "Payment Successful!" }</h2>
                    <p>{ format!("{} credits have been added to your account.", credits) }</p>
                    { ui::outline_button("Close", dismiss) }
                </div>
            </div>
        },
        PaymentStatus::Cancelled => html! {
            <div class="banner warning" role="alert">
                { "Payment cancelled. You have not been charged." }
                { ui::outline_button("Dismiss", dismiss) }
            </div>
        },
        PaymentStatus::Failed(message) => html! {
            <div class="banner error" role="alert">
                { message.clone() }
                { ui::outline_button("Dismiss", dismiss) }
            </div>
        },
        PaymentStatus::Verifying => html! {
            <div class="banner info">{ "Verifying your payment..." }</div>
        },
        PaymentStatus::Idle | PaymentStatus::Preparing | PaymentStatus::WidgetOpen => {
            Html::default()
        }
    }
}
