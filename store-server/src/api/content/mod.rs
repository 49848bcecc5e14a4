//! Static content API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/services", get(handler::services))
        .route("/api/company", get(handler::company))
}
