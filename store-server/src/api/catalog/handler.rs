//! Catalog API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::catalog::{CategoryFilter, filter};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::product::Product;

use crate::core::ServerState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// "All" (default) or an exact category label
    pub category: Option<String>,
    /// Case-insensitive substring match on name or description
    pub search: Option<String>,
}

/// GET /api/products?category=&search= - filtered catalog
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let category = match query.category.as_deref() {
        None | Some("") => CategoryFilter::All,
        Some(label) => CategoryFilter::parse(label).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::CategoryUnknown,
                format!("Unknown category: {}", label),
            )
        })?,
    };

    let search = query.search.as_deref().unwrap_or("");
    Ok(Json(filter(&state.catalog, category, search)))
}

/// GET /api/products/:id - single product
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    Ok(Json(state.product(&id)?))
}
