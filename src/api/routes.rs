//! API route configuration.

use crate::api::handlers::{
    next_steps_handler, tourism_options_handler, verify_body_handler, verify_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes. None require authentication.
///
/// # Endpoints
///
/// - `GET  /verify?token=`     - Verify a token from the query string
/// - `POST /verify`            - Verify a token from a JSON body
/// - `GET  /next-steps`        - Steps suggested after a failed verification
/// - `GET  /tourism-options`   - Promoted destinations
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/verify", get(verify_handler).post(verify_body_handler))
        .route("/next-steps", get(next_steps_handler))
        .route("/tourism-options", get(tourism_options_handler))
}
