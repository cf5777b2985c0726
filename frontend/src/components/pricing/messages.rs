use common::error::ToolError;
use common::model::payment::{CheckoutConfirmation, PaymentOrder};

pub enum Msg {
    /// Purchase button clicked; the index points into the plan catalog.
    Purchase(usize),
    OrderReady(Result<PaymentOrder, ToolError>),
    /// The widget's completion callback fired. `None` means the gateway
    /// handed back a response without the confirmation triple.
    CheckoutCompleted(Option<CheckoutConfirmation>),
    /// The widget was closed without completing.
    CheckoutDismissed,
    Verified(Result<(), ToolError>),
    /// Close the outcome banner or modal.
    ClearStatus,
}
