//! Component state for the navigation sidebar.

use crate::credit_bus::Subscription;
use crate::tabs::Section;

pub struct Sidebar {
    /// Last known credit balance. `None` renders as "-" until the first
    /// lookup completes (or when every lookup fails).
    pub credits: Option<u64>,

    /// Sections the user has collapsed; all start expanded.
    pub collapsed: Vec<Section>,

    /// Keeps the credit-change subscription alive for the component's
    /// lifetime; dropped on unmount.
    _subscription: Subscription,
}

impl Sidebar {
    pub fn new(subscription: Subscription) -> Self {
        Sidebar {
            credits: None,
            collapsed: Vec::new(),
            _subscription: subscription,
        }
    }

    pub fn is_collapsed(&self, section: Section) -> bool {
        self.collapsed.contains(&section)
    }
}
