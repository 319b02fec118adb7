//! Handlers for the token verification endpoints.

use axum::{
    Json,
    extract::{OriginalUri, State, rejection::JsonRejection},
};

use crate::api::dto::verification::{VerifyRequest, VerifyResponse};
use crate::domain::entities::VerifiedAccount;
use crate::domain::token_error::TokenValidationError;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::token_extractor::extract_token;

/// Verifies the token carried in the request's query string.
///
/// # Endpoint
///
/// `GET /api/verify?token={token}`
///
/// The token is read from the full request URI with the same rules as the
/// HTML page: first occurrence wins and `?token=` counts as missing.
///
/// # Response Codes
///
/// - **200 OK**: Token verified
/// - **400 Bad Request**: `TOKEN_NOT_FOUND`
/// - **422 Unprocessable Entity**: `TOKEN_INVALID`
/// - **410 Gone**: `TOKEN_EXPIRED`
/// - **502 Bad Gateway**: `NETWORK_ERROR`
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "message": "¡Tu cuenta ha sido verificada exitosamente! ...",
///   "data": { "userId": "demo-user-id", "email": "demo@turisapp.com" }
/// }
/// ```
pub async fn verify_handler(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<VerifyResponse>, AppError> {
    let token = extract_token(&uri.to_string());

    verify(&state, token.as_deref()).await
}

/// Verifies the token carried in a JSON body.
///
/// # Endpoint
///
/// `POST /api/verify`
///
/// # Request
///
/// ```json
/// { "token": "ABCDEFGHIJ0123456789+/=" }
/// ```
///
/// # Errors
///
/// Same as [`verify_handler`], plus `400 validation_error` for a malformed body.
pub async fn verify_body_handler(
    State(state): State<AppState>,
    payload: Result<Json<VerifyRequest>, JsonRejection>,
) -> Result<Json<VerifyResponse>, AppError> {
    let Json(request) = payload?;

    verify(&state, request.token.as_deref()).await
}

async fn verify(state: &AppState, token: Option<&str>) -> Result<Json<VerifyResponse>, AppError> {
    let result = state.token_service.verify(token).await;
    record_verification(outcome_label(&result));

    Ok(Json(result?.into()))
}

fn outcome_label(result: &Result<VerifiedAccount, TokenValidationError>) -> &'static str {
    match result {
        Ok(_) => "SUCCESS",
        Err(err) => err.kind.as_str(),
    }
}

/// Counts a finished verification, labelled by outcome.
///
/// Emits `token_verifications_total{outcome}` to the globally installed
/// `metrics` recorder. This service installs none; without one the
/// increment is a no-op, so exporting is up to the embedding process.
pub fn record_verification(outcome: &'static str) {
    metrics::counter!("token_verifications_total", "outcome" => outcome).increment(1);
}
