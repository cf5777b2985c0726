//! Component state for the credit purchase screen.

/// Where the purchase protocol currently stands. The widget's dismiss
/// hook only counts as a cancellation while the widget is open; once a
/// confirmation is in hand, verification decides the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentStatus {
    Idle,
    /// Loading the checkout script and minting the order.
    Preparing,
    WidgetOpen,
    Verifying,
    Success { credits: u32 },
    Cancelled,
    Failed(String),
}

pub struct Pricing {
    pub status: PaymentStatus,

    /// Index into the plan catalog for the purchase in progress.
    pub pending_plan: Option<usize>,
}

impl Pricing {
    pub fn new() -> Self {
        Pricing {
            status: PaymentStatus::Idle,
            pending_plan: None,
        }
    }

    /// True from the moment a purchase starts until it settles.
    pub fn busy(&self) -> bool {
        matches!(
            self.status,
            PaymentStatus::Preparing | PaymentStatus::WidgetOpen | PaymentStatus::Verifying
        )
    }
}
