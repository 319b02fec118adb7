//! Handlers for static content lists.

use axum::{Json, extract::State};

use crate::domain::entities::{NextStep, TourismOption};
use crate::state::AppState;

/// Returns the steps suggested after a failed verification.
///
/// # Endpoint
///
/// `GET /api/next-steps`
pub async fn next_steps_handler(State(state): State<AppState>) -> Json<Vec<NextStep>> {
    Json(state.content_service.next_steps())
}

/// Returns the promoted tourism destinations.
///
/// # Endpoint
///
/// `GET /api/tourism-options`
pub async fn tourism_options_handler(State(state): State<AppState>) -> Json<Vec<TourismOption>> {
    Json(state.content_service.tourism_options())
}
