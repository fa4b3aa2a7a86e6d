mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use login_portal::api::handlers::health_handler;
use std::sync::Arc;

use common::StubAuthClient;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (state, _sessions) = common::create_test_state(Arc::new(StubAuthClient::succeeding("A", "R")));
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["session_store"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let (state, _sessions) = common::create_test_state(Arc::new(StubAuthClient::succeeding("A", "R")));
    let server = TestServer::new(login_portal::routes::router(state)).unwrap();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["checks"].get("session_store").is_some());
}
