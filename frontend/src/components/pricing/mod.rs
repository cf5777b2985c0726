//! Credit purchase screen: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view
//! rendering, and the payment-gateway glue.
//!
//! Responsibilities
//! - Show the fixed three-plan catalog with prices and credit amounts.
//! - Drive the three-step purchase protocol: mint an order on the
//!   backend, open the gateway's checkout widget, verify the signed
//!   confirmation server-side.
//! - Only a verified payment announces new credits on the credit bus.

use yew::prelude::*;

mod checkout;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::Pricing;

impl Component for Pricing {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Pricing::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
