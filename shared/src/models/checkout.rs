//! Checkout form state and payment methods

use serde::{Deserialize, Serialize};

/// Payment method selected at checkout
///
/// Serialized as the customer-facing label, which is also what the order
/// message prints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "Cash on Delivery")]
    CashOnDelivery,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    #[serde(rename = "WhatsApp Payment Slip")]
    WhatsAppPaymentSlip,
}

impl PaymentMethod {
    /// Customer-facing label
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::WhatsAppPaymentSlip => "WhatsApp Payment Slip",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Customer-supplied delivery and payment details
///
/// Reset to defaults by the caller after a successful order submission.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CheckoutInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

impl CheckoutInfo {
    /// Names of required fields that are empty or whitespace-only
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.address.trim().is_empty() {
            missing.push("address");
        }
        if self.phone.trim().is_empty() {
            missing.push("phone");
        }
        missing
    }

    /// Whether all required fields are filled in
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
