//! Update function for the navigation sidebar.

use yew::prelude::*;

use crate::session;

use super::messages::Msg;
use super::state::Sidebar;

pub fn update(component: &mut Sidebar, ctx: &Context<Sidebar>, msg: Msg) -> bool {
    match msg {
        Msg::RefreshCredits => {
            super::refresh_credits(ctx);
            false
        }
        Msg::CreditsLoaded(balance) => {
            // A failed refresh keeps the previous figure instead of
            // blanking the card.
            if balance.is_some() {
                component.credits = balance;
            }
            balance.is_some()
        }
        Msg::ToggleSection(section) => {
            if let Some(pos) = component.collapsed.iter().position(|s| *s == section) {
                component.collapsed.remove(pos);
            } else {
                component.collapsed.push(section);
            }
            true
        }
        Msg::SignOut => {
            session::sign_out();
            false
        }
    }
}
