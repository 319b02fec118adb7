//! Fallbacks for unknown routes and unexpected failures.

use axum::{
    http::{HeaderValue, Response, StatusCode, header},
    response::{IntoResponse, Redirect},
};
use std::any::Any;

/// Static page shown when the application fails unexpectedly.
pub const FALLBACK_HTML: &str = "<!DOCTYPE html>\
<html lang=\"es\"><head><meta charset=\"utf-8\"><title>TurisApp Colombia</title></head>\
<body><h1>Error al cargar la aplicación</h1><p>Por favor, recarga la página.</p></body></html>";

/// Redirects any unknown path to the verification page.
///
/// The query string of the unknown path is dropped.
pub async fn redirect_home() -> impl IntoResponse {
    Redirect::to("/")
}

/// Turns a handler panic into the static fallback page.
///
/// Used with [`tower_http::catch_panic::CatchPanicLayer::custom`].
pub fn fallback_on_panic(err: Box<dyn Any + Send + 'static>) -> Response<String> {
    let reason = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!(reason, "Handler panicked, serving fallback page");

    let mut response = Response::new(FALLBACK_HTML.to_string());
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_on_panic_response() {
        let response = fallback_on_panic(Box::new("boom"));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
        assert!(response.body().contains("Error al cargar la aplicación"));
    }
}
