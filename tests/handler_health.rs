mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use token_verify::api::handlers::health_handler;
use token_verify::domain::token_error::TokenErrorKind;

#[tokio::test]
async fn test_health_endpoint_success() {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(common::create_test_state());

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["backend"]["status"], "ok");
    assert_eq!(
        json["checks"]["backend"]["message"],
        "format-check backend ready"
    );
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(common::create_rejecting_state(
            TokenErrorKind::NetworkError,
            false,
        ));

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["backend"]["status"], "error");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(common::create_test_state());

    let server = TestServer::new(app).unwrap();

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["checks"].get("backend").is_some());
}
