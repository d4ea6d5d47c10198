mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use repo_analyzer::api::handlers::{health_handler, index_handler};
use sqlx::SqlitePool;
use std::time::Duration;

#[sqlx::test]
async fn test_health_endpoint_success(pool: SqlitePool) {
    let state = common::create_test_state(pool, common::UNUSED_GITHUB_URL, Duration::from_secs(1));
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[sqlx::test]
async fn test_health_endpoint_database_down(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone(), common::UNUSED_GITHUB_URL, Duration::from_secs(1));
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();
    pool.close().await;

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}

#[tokio::test]
async fn test_index_lists_endpoints() {
    let app = Router::new().route("/", get(index_handler));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let endpoints = json["endpoints"].as_array().unwrap();
    assert!(endpoints.iter().any(|e| e == "/top"));
    assert!(endpoints.iter().any(|e| e == "/fetch/{username}"));
}
