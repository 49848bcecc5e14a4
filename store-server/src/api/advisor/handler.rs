//! Advisor API handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use uuid::Uuid;

use shared::error::{AppError, AppResult, ErrorCode};

use crate::advisor::AdvisorAnswer;
use crate::core::ServerState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub prompt: String,
}

/// POST /api/advisor/:session - sequenced advisory call
///
/// Takes a ticket from the session's gate before calling the upstream and
/// publishes the answer only if the ticket is still the latest when the
/// call returns. The ticket releases the gate on drop, so a client
/// disconnect mid-call never leaves the session wedged. Upstream failures
/// degrade to the fixed fallback answer; a duplicate submission while one
/// is in flight gets 409.
pub async fn ask(
    State(state): State<ServerState>,
    Path(session): Path<Uuid>,
    Json(request): Json<AskRequest>,
) -> AppResult<Json<AdvisorAnswer>> {
    let prompt = request.prompt.trim().to_string();
    if prompt.is_empty() {
        return Err(AppError::validation("Prompt must not be empty"));
    }

    let session = state.session(&session)?;

    // Take the ticket under the lock, then call upstream without it
    let ticket = {
        let guard = session.lock().await;
        guard.gate.try_begin()?
    };

    let answer = match state.advisor.ask(&prompt).await {
        Ok(answer) => answer,
        Err(e) => {
            tracing::warn!(code = %e.code, message = %e.message, "advisor upstream failed");
            AdvisorAnswer::fallback()
        }
    };

    let mut guard = session.lock().await;
    if !ticket.complete() {
        // A newer request superseded this one while it was in flight
        return Err(AppError::with_message(
            ErrorCode::AdvisorBusy,
            "Superseded by a newer request",
        ));
    }
    guard.advisor_answer = Some(answer.clone());

    Ok(Json(answer))
}
