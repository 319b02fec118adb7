mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use token_verify::web;
use token_verify::web::handlers::{fallback_on_panic, redirect_home};
use tower_http::catch_panic::CatchPanicLayer;

fn server() -> TestServer {
    let app = Router::new()
        .merge(web::routes::routes())
        .fallback(redirect_home)
        .with_state(common::create_test_state());

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_page_with_valid_token() {
    let response = server()
        .get(&format!("/?token={}", common::VALID_TOKEN_ENCODED))
        .await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("card--success"));
    assert!(html.contains("demo@turisapp.com"));
    assert!(html.contains("Cartagena"));
    assert!(!html.contains("/register"));
}

#[tokio::test]
async fn test_page_without_token() {
    let response = server().get("/").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("card--error"));
    assert!(html.contains("TOKEN_NOT_FOUND"));
    assert!(html.contains("Token no encontrado en la URL"));
    assert!(html.contains("/register"));
    assert!(html.contains("/contact"));
}

#[tokio::test]
async fn test_page_with_invalid_token() {
    let response = server().get("/?token=abc123").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("TOKEN_INVALID"));
    assert!(html.contains("Coveñas"));
}

#[tokio::test]
async fn test_demo_page_lists_links() {
    let response = server().get("/demo").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("/?token=abc123"));
    assert!(html.contains("TOKEN_NOT_FOUND"));
    assert!(html.contains("https://accounts.test/api"));
}

#[tokio::test]
async fn test_unknown_path_redirects_home() {
    let response = server().get("/some/unknown/page").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");
}

#[tokio::test]
async fn test_panic_serves_fallback_page() {
    async fn explode() -> &'static str {
        panic!("boom")
    }

    let app = Router::new()
        .route("/explode", get(explode))
        .layer(CatchPanicLayer::custom(fallback_on_panic));

    let server = TestServer::new(app).unwrap();

    let response = server.get("/explode").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text().contains("Error al cargar la aplicación"));
}
