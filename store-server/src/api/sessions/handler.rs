//! Session API handlers

use axum::{Json, extract::State};
use serde::Serialize;
use uuid::Uuid;

use crate::core::ServerState;

#[derive(Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
}

/// POST /api/sessions - mint a fresh browsing session
pub async fn create(State(state): State<ServerState>) -> Json<SessionResponse> {
    let session_id = state.create_session();
    Json(SessionResponse { session_id })
}
