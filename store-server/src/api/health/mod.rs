//! Health check route
//!
//! | Path | Method | Description | Auth |
//! |------|--------|-------------|------|
//! | /api/health | GET | Liveness and uptime | none |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use shared::util::now_millis;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    /// Status (always "healthy" while the process serves)
    status: &'static str,
    version: &'static str,
    environment: String,
    /// Seconds since state initialization
    uptime_seconds: u64,
    /// Number of live sessions
    sessions: usize,
    /// Number of catalog products
    products: usize,
}

pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let uptime_seconds = now_millis()
        .saturating_sub(state.started_at)
        .max(0) as u64
        / 1000;

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        uptime_seconds,
        sessions: state.sessions.len(),
        products: state.catalog.len(),
    })
}
