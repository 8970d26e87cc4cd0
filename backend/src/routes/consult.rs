//! Consultation API routes

use crate::error::ApiError;
use crate::services::ConsultationService;
use crate::state::AppState;
use axum::{extract::State, Json};
use health_advisor_shared::types::{
    AdviseRequest, AdviseResponse, ConfirmRequest, ConfirmResponse,
};

/// POST /advise - Evaluate an intake and advise the user
///
/// Always generates free-text advice; when the advisory is high-risk, also
/// resolves a provider and sends a booking offer to the given phone number.
pub async fn advise(
    State(state): State<AppState>,
    Json(req): Json<AdviseRequest>,
) -> Result<Json<AdviseResponse>, ApiError> {
    let response = ConsultationService::advise(&state, req).await?;
    Ok(Json(response))
}

/// POST /confirm - Confirm an appointment with a named provider
///
/// Sends the confirmation message to the given phone number and echoes it
/// back with the delivery status.
pub async fn confirm(
    State(state): State<AppState>,
    Json(req): Json<ConfirmRequest>,
) -> Result<Json<ConfirmResponse>, ApiError> {
    let response = ConsultationService::confirm(&state, req).await?;
    Ok(Json(response))
}
