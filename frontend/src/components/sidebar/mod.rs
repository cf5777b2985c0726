//! Navigation sidebar: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, and view
//! rendering.
//!
//! Responsibilities
//! - Group the tool tabs into collapsible sections and highlight the one
//!   that is mounted.
//! - Show the signed-in user's credit balance, refreshed on mount and
//!   whenever any tool reports that credits were spent or purchased.
//! - Expose sign-out and a shortcut to the pricing screen.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::credit_bus;
use crate::session;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::SidebarProps;
pub use state::Sidebar;

impl Component for Sidebar {
    type Message = Msg;
    type Properties = SidebarProps;

    fn create(ctx: &Context<Self>) -> Self {
        let subscription = credit_bus::subscribe(ctx.link().callback(|_| Msg::RefreshCredits));
        Sidebar::new(subscription)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            refresh_credits(ctx);
        }
    }
}

fn refresh_credits(ctx: &Context<Sidebar>) {
    let Some(user) = session::current_user() else {
        return;
    };
    let link = ctx.link().clone();
    spawn_local(async move {
        let balance = api::fetch_credits(&user.id).await;
        link.send_message(Msg::CreditsLoaded(balance));
    });
}
