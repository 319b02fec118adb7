//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: The token backend is unhealthy
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "backend": {
///       "status": "ok",
///       "message": "format-check backend ready"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let backend_check = check_backend(&state).await;

    let all_healthy = backend_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            backend: backend_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks the token backend.
async fn check_backend(state: &AppState) -> CheckStatus {
    let name = state.token_service.backend_name();

    if state.token_service.backend_healthy().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{name} backend ready")),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some(format!("{name} backend unavailable")),
        }
    }
}
