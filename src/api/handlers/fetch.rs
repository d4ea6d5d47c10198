//! Handler for fetching a user's repositories from GitHub.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::fetch::FetchResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Fetches every repository of a GitHub user and upserts it into the store.
///
/// # Endpoint
///
/// `GET /fetch/{username}`
///
/// # Response
///
/// ```json
/// { "owner": "octocat", "fetched": 8, "written": 8 }
/// ```
///
/// # Errors
///
/// - 400 if the username is not a valid GitHub login
/// - 404 if GitHub does not know the user
/// - 429 if the GitHub rate limit is exhausted
/// - 502 on any other GitHub failure
/// - 500 on database errors
pub async fn fetch_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<FetchResponse>, AppError> {
    let summary = state.repo_service.fetch_and_store(&username).await?;

    Ok(Json(summary.into()))
}
