//! Payment wire types for the three-step checkout protocol: create an
//! order, hand it to the gateway widget, verify the signed confirmation.

use serde::{Deserialize, Serialize};

/// Order token minted by the backend for the gateway. `amount` is in the
/// currency's smallest unit (paise), as the gateway expects.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaymentOrder {
    pub id: String,
    pub amount: u64,
    pub currency: String,
}

/// Confirmation triple the checkout widget hands back on completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfirmation {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderRequest {
    pub amount: u32,
}

/// Verification payload: the gateway's confirmation triple plus the claimed
/// credit amount and a profile snapshot the ledger uses to upsert the user.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyPaymentRequest {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
    #[serde(rename = "clerkId")]
    pub clerk_id: String,
    pub credits: u32,
    #[serde(rename = "userData")]
    pub user_data: PaymentUserData,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentUserData {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub photo_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_request_uses_gateway_field_names() {
        let req = VerifyPaymentRequest {
            razorpay_order_id: "order_1".into(),
            razorpay_payment_id: "pay_1".into(),
            razorpay_signature: "sig".into(),
            clerk_id: "user_1".into(),
            credits: 120,
            user_data: PaymentUserData {
                email: "a@b.c".into(),
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                photo_url: "https://img".into(),
            },
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["razorpay_order_id"], "order_1");
        assert_eq!(json["clerkId"], "user_1");
        assert_eq!(json["userData"]["firstName"], "Ada");
        assert_eq!(json["userData"]["photoUrl"], "https://img");
        assert_eq!(json["credits"], 120);
    }

    #[test]
    fn order_deserializes() {
        let order: PaymentOrder = serde_json::from_str(
            r#"{"id": "order_9", "amount": 19900, "currency": "INR"}"#,
        )
        .unwrap();
        assert_eq!(order.amount, 19900);
        assert_eq!(order.currency, "INR");
    }
}
