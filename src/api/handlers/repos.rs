//! Handler for listing stored repositories.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::repo::{RepoItem, RepoListQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Lists stored repositories, optionally filtered by owner.
///
/// # Endpoint
///
/// `GET /repos?owner=`
///
/// # Query Parameters
///
/// - `owner` (optional): GitHub login to filter by
///
/// An unknown owner returns an empty array.
pub async fn repos_handler(
    State(state): State<AppState>,
    query: Result<Query<RepoListQuery>, QueryRejection>,
) -> Result<Json<Vec<RepoItem>>, AppError> {
    let Query(params) = query?;

    let repos = state.repo_service.list_repos(params.owner()).await?;

    Ok(Json(repos.into_iter().map(RepoItem::from).collect()))
}
