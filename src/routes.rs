//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`          - Verification page (public)
//! - `GET  /demo`      - Demo page (public)
//! - `GET  /health`    - Health check: token backend (public)
//! - `/api/*`          - JSON API (rate limited per IP)
//! - `/static/*`       - Static assets
//! - anything else     - Redirect to `/`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging without query strings
//! - **Rate limiting** - Per-IP token bucket on the API
//! - **Panic fallback** - Static error page instead of a dropped connection
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use crate::web;
use crate::web::handlers::{fallback_on_panic, redirect_home};
use anyhow::Result;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

// `CatchPanicLayer` serves the fallback page by unwinding the handler.
#[cfg(panic = "abort")]
compile_error!("the panic fallback page requires `panic = \"unwind\"`");

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `config` - provides the API rate limit settings
///
/// # Errors
///
/// Returns an error if the rate limit settings are invalid.
pub fn app_router(state: AppState, config: &Config) -> Result<NormalizePath<Router>> {
    let api_router = api::routes::routes().layer(rate_limit::layer(config)?);

    let router = Router::new()
        .merge(web::routes::routes())
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .nest_service("/static", ServeDir::new("static"))
        .fallback(redirect_home)
        .with_state(state)
        .layer(CatchPanicLayer::custom(fallback_on_panic))
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
