//! Static content API handlers

use axum::{Json, extract::State};
use serde::Serialize;

use shared::models::content::{Achievement, Executive, Service};

use crate::core::ServerState;

/// GET /api/services - service offerings
pub async fn services(State(state): State<ServerState>) -> Json<Vec<Service>> {
    Json(state.services.as_ref().clone())
}

#[derive(Serialize)]
pub struct CompanyResponse {
    pub executives: Vec<Executive>,
    pub history: Vec<Achievement>,
}

/// GET /api/company - company profile (leadership and milestones)
pub async fn company(State(state): State<ServerState>) -> Json<CompanyResponse> {
    Json(CompanyResponse {
        executives: state.executives.as_ref().clone(),
        history: state.history.as_ref().clone(),
    })
}
