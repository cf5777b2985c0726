use yew::prelude::*;

use crate::tabs::Tab;

/// Properties for the navigation [`Sidebar`](super::Sidebar).
#[derive(Properties, PartialEq, Clone)]
pub struct SidebarProps {
    /// The tab currently mounted in the shell; its nav entry is
    /// highlighted.
    pub active_tab: Tab,

    /// Emitted when the user picks a nav entry (or the "Buy More Credits"
    /// shortcut, which targets the pricing tab).
    pub on_tab_change: Callback<Tab>,
}
