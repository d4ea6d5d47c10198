//! Wire models for the GitHub repository listing.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::entities::Repo;

/// Repository item returned by `GET /users/{username}/repos`.
///
/// Only the fields persisted by this service are decoded.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    pub owner: GitHubOwner,
    #[serde(default)]
    pub stargazers_count: i64,
    #[serde(default)]
    pub forks_count: i64,
    pub language: Option<String>,
    #[serde(default)]
    pub html_url: String,
    pub updated_at: DateTime<Utc>,
}

/// Owner reference embedded in a repository item.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubOwner {
    pub login: String,
}

/// Error body returned by the GitHub API.
#[derive(Debug, Deserialize)]
pub struct GitHubErrorBody {
    pub message: String,
}

impl From<GitHubRepo> for Repo {
    fn from(r: GitHubRepo) -> Self {
        Repo::new(
            r.owner.login,
            r.name,
            r.stargazers_count,
            r.forks_count,
            r.language,
            r.html_url,
            r.updated_at,
        )
    }
}
