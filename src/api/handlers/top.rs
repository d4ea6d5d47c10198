//! Handler for ranking repositories by stars.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use validator::Validate;

use crate::api::dto::repo::{RepoItem, TopQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the most starred repositories.
///
/// # Endpoint
///
/// `GET /top?owner=&limit=`
///
/// # Query Parameters
///
/// - `owner` (optional): GitHub login to filter by
/// - `limit` (optional): number of repositories, 1-50 (default: 5)
///
/// Sorted by stars descending; ties ordered by owner, then name.
///
/// # Errors
///
/// Returns 400 Bad Request if `limit` is not an integer in range.
pub async fn top_handler(
    State(state): State<AppState>,
    query: Result<Query<TopQuery>, QueryRejection>,
) -> Result<Json<Vec<RepoItem>>, AppError> {
    let Query(params) = query?;
    params.validate()?;

    let repos = state
        .repo_service
        .top_repos(params.owner(), params.limit())
        .await?;

    Ok(Json(repos.into_iter().map(RepoItem::from).collect()))
}
