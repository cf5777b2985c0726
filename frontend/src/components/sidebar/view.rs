//! View rendering for the navigation sidebar.

use num_format::{Locale, ToFormattedString};
use yew::html::Scope;
use yew::prelude::*;

use crate::session;
use crate::tabs::{Section, Tab};

use super::messages::Msg;
use super::state::Sidebar;

pub fn view(component: &Sidebar, ctx: &Context<Sidebar>) -> Html {
    let link = ctx.link();
    let props = ctx.props();

    html! {
        <nav class="sidebar">
            <div class="sidebar-brand">
                <i class="material-icons">{ "auto_awesome" }</i>
                <span>{ "ExtraHands" }</span>
            </div>

            { build_credit_card(component, props.on_tab_change.clone()) }

            { build_entry(Tab::Dashboard, props.active_tab, &props.on_tab_change) }
            {
                for Section::ALL.iter().map(|section| {
                    build_section(component, link, *section, props.active_tab, &props.on_tab_change)
                })
            }
            { build_entry(Tab::Pricing, props.active_tab, &props.on_tab_change) }

            { build_footer(link) }
        </nav>
    }
}

/// Balance card at the top of the sidebar. An unknown balance renders as
/// "-" rather than zero, which would read as exhausted credits.
fn build_credit_card(component: &Sidebar, on_tab_change: Callback<Tab>) -> Html {
    let balance = match component.credits {
        Some(credits) => credits.to_formatted_string(&Locale::en),
        None => "-".to_string(),
    };
    let buy_more = Callback::from(move |_| on_tab_change.emit(Tab::Pricing));
    html! {
        <div class="credit-card">
            <span class="credit-label">{ "Credits" }</span>
            <span class="credit-balance">{ balance }</span>
            <button class="btn btn-small" onclick={buy_more}>{ "Buy More" }</button>
        </div>
    }
}

fn build_section(
    component: &Sidebar,
    link: &Scope<Sidebar>,
    section: Section,
    active: Tab,
    on_tab_change: &Callback<Tab>,
) -> Html {
    let collapsed = component.is_collapsed(section);
    let chevron = if collapsed { "expand_more" } else { "expand_less" };
    let entries = if collapsed {
        Html::default()
    } else {
        html! {
            <ul>
                { for section.tabs().iter().map(|tab| build_entry(*tab, active, on_tab_change)) }
            </ul>
        }
    };
    html! {
        <div class="sidebar-section">
            <button
                class="section-header"
                onclick={link.callback(move |_| Msg::ToggleSection(section))}
            >
                { section.label() }
                <i class="material-icons">{ chevron }</i>
            </button>
            { entries }
        </div>
    }
}

fn build_entry(tab: Tab, active: Tab, on_tab_change: &Callback<Tab>) -> Html {
    let onclick = {
        let on_tab_change = on_tab_change.clone();
        Callback::from(move |_| on_tab_change.emit(tab))
    };
    let badge = match tab.badge() {
        Some(text) => html! { <span class="badge">{ text }</span> },
        None => Html::default(),
    };
    html! {
        <li class={classes!("nav-entry", (tab == active).then_some("active"))}>
            <a onclick={onclick}>
                { tab.label() }
                { badge }
            </a>
        </li>
    }
}

fn build_footer(link: &Scope<Sidebar>) -> Html {
    let Some(user) = session::current_user() else {
        return Html::default();
    };
    let avatar = if user.image_url.is_empty() {
        html! { <i class="material-icons">{ "account_circle" }</i> }
    } else {
        html! { <img class="avatar" src={user.image_url.clone()} alt="" /> }
    };
    let email = if user.email.is_empty() {
        Html::default()
    } else {
        html! { <span class="email">{ user.email.clone() }</span> }
    };
    html! {
        <div class="sidebar-footer">
            { avatar }
            <div class="identity">
                <span class="name">{ user.display_name().to_string() }</span>
                { email }
            </div>
            <button
                class="btn btn-small"
                title="Sign out"
                onclick={link.callback(|_| Msg::SignOut)}
            >
                <i class="material-icons">{ "logout" }</i>
            </button>
        </div>
    }
}
