//! Order API handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use shared::error::{AppError, AppResult};
use shared::models::checkout::{CheckoutInfo, PaymentMethod};
use shared::order::{compose, order_link};

use crate::core::ServerState;

#[derive(Debug, Deserialize, Validate)]
pub struct SubmitOrderRequest {
    #[validate(length(max = 120, message = "Name is too long"))]
    pub name: String,
    #[validate(length(max = 500, message = "Address is too long"))]
    pub address: String,
    #[validate(length(max = 32, message = "Phone is too long"))]
    pub phone: String,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Serialize)]
pub struct SubmitOrderResponse {
    pub order_id: String,
    pub message: String,
    pub whatsapp_url: String,
    pub total: i64,
}

/// POST /api/orders/:session - compose the order, build the WhatsApp
/// hand-off link and clear the ledger
///
/// Validation failures (empty cart, missing checkout fields) leave the
/// ledger untouched; it is cleared only on success.
pub async fn submit(
    State(state): State<ServerState>,
    Path(session): Path<Uuid>,
    Json(request): Json<SubmitOrderRequest>,
) -> AppResult<Json<SubmitOrderResponse>> {
    request
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let checkout = CheckoutInfo {
        name: request.name,
        address: request.address,
        phone: request.phone,
        payment_method: request.payment_method,
    };

    let session = state.session(&session)?;
    let mut guard = session.lock().await;

    let order = compose(&guard.cart, &checkout)?;
    let whatsapp_url = order_link(&state.config.whatsapp_number, &order.message);

    guard.cart.clear();

    tracing::info!(order_id = %order.id, total = order.total, "order submitted");

    Ok(Json(SubmitOrderResponse {
        order_id: order.id,
        message: order.message,
        whatsapp_url,
        total: order.total,
    }))
}
