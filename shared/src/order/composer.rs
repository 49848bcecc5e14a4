//! Order composer
//!
//! Validates the cart and checkout details, then renders the canonical
//! WhatsApp order message. The message layout is a fixed contract with
//! the sales team's parsing habits: field order, the `#` id prefix, the
//! blank line after the item block, and the `*bold*` / `_italic_`
//! WhatsApp markup must not drift.

use crate::cart::CartLedger;
use crate::error::{AppError, ErrorCode};
use crate::models::checkout::{CheckoutInfo, PaymentMethod};
use crate::pricing::format_lkr;
use crate::util::order_token;
use serde::{Deserialize, Serialize};

/// A validated order, ready for the WhatsApp hand-off
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComposedOrder {
    pub id: String,
    pub message: String,
    pub total: i64,
}

/// Compose an order with a freshly generated order token.
///
/// Fails with [`ErrorCode::CartEmpty`] on an empty ledger and
/// [`ErrorCode::CheckoutIncomplete`] when name, address, or phone is
/// missing (the offending field names are attached as details).
pub fn compose(cart: &CartLedger, checkout: &CheckoutInfo) -> Result<ComposedOrder, AppError> {
    compose_with_id(cart, checkout, order_token())
}

/// Compose an order with a caller-supplied id (deterministic for tests)
pub fn compose_with_id(
    cart: &CartLedger,
    checkout: &CheckoutInfo,
    id: impl Into<String>,
) -> Result<ComposedOrder, AppError> {
    if cart.is_empty() {
        return Err(AppError::new(ErrorCode::CartEmpty));
    }

    let missing = checkout.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::new(ErrorCode::CheckoutIncomplete).with_detail("missing", missing));
    }

    let id = id.into();
    let total = cart.total();

    let item_lines: Vec<String> = cart
        .items()
        .iter()
        .map(|i| {
            format!(
                "{} x{} ({})",
                i.product.name,
                i.quantity,
                format_lkr(i.line_total())
            )
        })
        .collect();

    let mut message = String::from("*NEW ORDER - Smart Solutions Lanka*\n");
    message.push_str(&format!("Order ID: #{}\n", id));
    message.push_str(&format!("Customer: {}\n", checkout.name));
    message.push_str(&format!("Phone: {}\n", checkout.phone));
    message.push_str(&format!("Address: {}\n", checkout.address));
    message.push_str(&format!("Items:\n{}\n\n", item_lines.join("\n")));
    message.push_str(&format!("Total: {}\n", format_lkr(total)));
    message.push_str(&format!("Payment: {}\n", checkout.payment_method.label()));
    message.push_str("Delivery: 2-3 Days\n");

    if checkout.payment_method == PaymentMethod::WhatsAppPaymentSlip {
        message.push_str("\n_Please attach your payment slip to this message._");
    }

    Ok(ComposedOrder { id, message, total })
}
