use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::token_error::{TokenErrorKind, TokenValidationError};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Errors returned by the JSON API.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error(transparent)]
    Token(#[from] TokenValidationError),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

/// HTTP status used for a failed verification of the given kind.
pub fn status_for_kind(kind: TokenErrorKind) -> StatusCode {
    match kind {
        TokenErrorKind::TokenNotFound => StatusCode::BAD_REQUEST,
        TokenErrorKind::TokenInvalid => StatusCode::UNPROCESSABLE_ENTITY,
        TokenErrorKind::TokenExpired => StatusCode::GONE,
        TokenErrorKind::NetworkError => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::Token(err) => (
                status_for_kind(err.kind),
                err.kind.as_str(),
                err.message,
                json!({}),
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}
