mod common;

use axum::Router;
use axum_test::TestServer;
use token_verify::api;

fn server() -> TestServer {
    let app = Router::new()
        .nest("/api", api::routes::routes())
        .with_state(common::create_test_state());

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_next_steps() {
    let response = server().get("/api/next-steps").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let steps = json.as_array().unwrap();
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0]["icon"], "fa-link");
    assert!(steps[0].get("link").is_none());
    assert_eq!(steps[1]["link"], "/register");
    assert_eq!(steps[2]["link"], "/contact");
}

#[tokio::test]
async fn test_tourism_options() {
    let response = server().get("/api/tourism-options").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let options = json.as_array().unwrap();
    assert_eq!(options.len(), 2);
    assert_eq!(options[0]["title"], "Cartagena");
    assert_eq!(options[0]["color"], "#f59e0b");
    assert_eq!(options[1]["title"], "Coveñas");
    assert_eq!(options[1]["icon"], "fa-umbrella-beach");
}
