//! Cart API handlers
//!
//! Every handler locks the session mutex for the duration of the mutation,
//! so concurrent requests against one session are serialized while
//! distinct sessions proceed independently.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared::cart::CartItem;
use shared::error::AppResult;

use crate::core::ServerState;

#[derive(Serialize)]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    /// Recomputed on every read, never cached
    pub total: i64,
}

impl CartResponse {
    fn from_cart(cart: &shared::cart::CartLedger) -> Self {
        Self {
            items: cart.items().to_vec(),
            total: cart.total(),
        }
    }
}

#[derive(Deserialize)]
pub struct AddItemRequest {
    pub product_id: String,
}

#[derive(Deserialize)]
pub struct AdjustQuantityRequest {
    pub delta: i32,
}

/// GET /api/cart/:session - current items and total
pub async fn get_cart(
    State(state): State<ServerState>,
    Path(session): Path<Uuid>,
) -> AppResult<Json<CartResponse>> {
    let session = state.session(&session)?;
    let guard = session.lock().await;
    Ok(Json(CartResponse::from_cart(&guard.cart)))
}

/// POST /api/cart/:session/items - add one unit of a product
pub async fn add_item(
    State(state): State<ServerState>,
    Path(session): Path<Uuid>,
    Json(request): Json<AddItemRequest>,
) -> AppResult<Json<CartResponse>> {
    let product = state.product(&request.product_id)?;
    let session = state.session(&session)?;
    let mut guard = session.lock().await;
    guard.cart.add(&product);
    tracing::debug!(product = %product.id, "cart add");
    Ok(Json(CartResponse::from_cart(&guard.cart)))
}

/// PATCH /api/cart/:session/items/:product_id - adjust quantity by delta
pub async fn adjust_quantity(
    State(state): State<ServerState>,
    Path((session, product_id)): Path<(Uuid, String)>,
    Json(request): Json<AdjustQuantityRequest>,
) -> AppResult<Json<CartResponse>> {
    let session = state.session(&session)?;
    let mut guard = session.lock().await;
    guard.cart.set_quantity_delta(&product_id, request.delta);
    Ok(Json(CartResponse::from_cart(&guard.cart)))
}

/// DELETE /api/cart/:session/items/:product_id - remove a line
pub async fn remove_item(
    State(state): State<ServerState>,
    Path((session, product_id)): Path<(Uuid, String)>,
) -> AppResult<Json<CartResponse>> {
    let session = state.session(&session)?;
    let mut guard = session.lock().await;
    guard.cart.remove(&product_id);
    Ok(Json(CartResponse::from_cart(&guard.cart)))
}

/// DELETE /api/cart/:session - empty the cart
pub async fn clear(
    State(state): State<ServerState>,
    Path(session): Path<Uuid>,
) -> AppResult<Json<CartResponse>> {
    let session = state.session(&session)?;
    let mut guard = session.lock().await;
    guard.cart.clear();
    Ok(Json(CartResponse::from_cart(&guard.cart)))
}
