//! API route configuration.

use crate::api::handlers::{fetch_handler, repos_handler, top_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Repository routes.
///
/// # Endpoints
///
/// - `GET /fetch/{username}` - Fetch a user's repositories from GitHub and store them
/// - `GET /repos`            - List stored repositories (`owner` filter)
/// - `GET /top`              - Most starred repositories (`owner`, `limit`)
pub fn repo_routes() -> Router<AppState> {
    Router::new()
        .route("/fetch/{username}", get(fetch_handler))
        .route("/repos", get(repos_handler))
        .route("/top", get(top_handler))
}
