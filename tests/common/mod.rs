#![allow(dead_code)]

use axum::Router;
use chrono::{DateTime, Utc};
use repo_analyzer::infrastructure::github::GitHubClient;
use repo_analyzer::infrastructure::persistence::SqliteRepoStore;
use repo_analyzer::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;

/// Base URL for tests that never reach GitHub.
pub const UNUSED_GITHUB_URL: &str = "http://127.0.0.1:9";

pub fn timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

pub async fn insert_repo(pool: &SqlitePool, owner: &str, name: &str, stars: i64) {
    insert_repo_updated(pool, owner, name, stars, "2024-01-01T00:00:00Z").await;
}

pub async fn insert_repo_updated(
    pool: &SqlitePool,
    owner: &str,
    name: &str,
    stars: i64,
    updated_at: &str,
) {
    sqlx::query(
        "INSERT INTO repos (owner, name, stars, forks, language, url, updated_at) \
         VALUES (?1, ?2, ?3, 0, 'Rust', ?4, ?5)",
    )
    .bind(owner)
    .bind(name)
    .bind(stars)
    .bind(format!("https://github.com/{owner}/{name}"))
    .bind(timestamp(updated_at))
    .execute(pool)
    .await
    .unwrap();
}

pub async fn count_repos(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM repos")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool, github_url: &str, timeout: Duration) -> AppState {
    let store = Arc::new(SqliteRepoStore::new(Arc::new(pool)));
    let fetcher = GitHubClient::with_base_url(github_url, None, timeout).unwrap();

    AppState::new(store, Arc::new(fetcher))
}

pub fn create_test_app(pool: SqlitePool, github_url: &str) -> Router {
    create_test_app_with_timeout(pool, github_url, Duration::from_secs(5))
}

pub fn create_test_app_with_timeout(
    pool: SqlitePool,
    github_url: &str,
    timeout: Duration,
) -> Router {
    Router::new()
        .merge(repo_analyzer::api::routes::repo_routes())
        .with_state(create_test_state(pool, github_url, timeout))
}

/// GitHub listing item for wiremock responses.
pub fn github_repo(owner: &str, name: &str, stars: i64) -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "name": name,
        "full_name": format!("{owner}/{name}"),
        "owner": {"login": owner, "id": 1},
        "html_url": format!("https://github.com/{owner}/{name}"),
        "stargazers_count": stars,
        "forks_count": 2,
        "language": "Rust",
        "updated_at": "2024-03-01T10:00:00Z"
    })
}
