//! Contract for fetching repository metadata from the upstream API.

use crate::domain::entities::Repo;
use async_trait::async_trait;
use thiserror::Error;

/// Failure while listing repositories upstream.
///
/// No retry is attempted and no partial result is returned.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("GitHub user not found: {0}")]
    UserNotFound(String),

    #[error("GitHub API rate limit exceeded")]
    RateLimited,

    #[error("GitHub API rejected the token")]
    Unauthorized,

    #[error("GitHub API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid GitHub API URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to decode GitHub response: {0}")]
    Decode(String),
}

/// Source of repository metadata for a single account.
///
/// # Implementations
///
/// - [`crate::infrastructure::github::GitHubClient`] - GitHub REST API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepoFetcher: Send + Sync {
    /// Lists every repository owned by `username`, following pagination
    /// until the last page.
    ///
    /// Items are returned in upstream order.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on the first failing page.
    async fn fetch_all_repos(&self, username: &str) -> Result<Vec<Repo>, FetchError>;
}
