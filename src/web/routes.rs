//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{demo_handler, verification_handler};
use axum::{Router, routing::get};

/// Public HTML pages.
///
/// # Endpoints
///
/// - `GET /`     - Verification page for `?token=`
/// - `GET /demo` - Demo page with sample verification links
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(verification_handler))
        .route("/demo", get(demo_handler))
}
