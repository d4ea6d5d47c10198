//! Repository fetch, listing and ranking service.

use std::sync::Arc;

use crate::domain::entities::Repo;
use crate::domain::repositories::{RepoFetcher, RepoStore};
use crate::error::AppError;
use crate::utils::username::validate_username;

/// Outcome of fetching and storing one account's repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSummary {
    pub owner: String,
    pub fetched: usize,
    pub written: u64,
}

/// Service coordinating the upstream fetcher and the local store.
pub struct RepoService<S: RepoStore, F: RepoFetcher> {
    store: Arc<S>,
    fetcher: Arc<F>,
}

impl<S: RepoStore, F: RepoFetcher> RepoService<S, F> {
    /// Creates a new repository service.
    pub fn new(store: Arc<S>, fetcher: Arc<F>) -> Self {
        Self { store, fetcher }
    }

    /// Fetches every repository of `username` and upserts them.
    ///
    /// All pages are fetched before anything is written, so a failed fetch
    /// leaves the store untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an invalid username, the mapped
    /// upstream error if fetching fails, and [`AppError::Internal`] on
    /// database errors.
    pub async fn fetch_and_store(&self, username: &str) -> Result<FetchSummary, AppError> {
        validate_username(username)?;

        let repos = self.fetcher.fetch_all_repos(username).await?;
        let fetched = repos.len();

        // Stored rows carry the login as GitHub spells it, not as requested.
        let owner = repos
            .first()
            .map_or_else(|| username.to_string(), |r| r.owner.clone());

        let written = self.store.upsert(repos).await?;
        tracing::info!(%owner, fetched, written, "stored repositories");

        Ok(FetchSummary {
            owner,
            fetched,
            written,
        })
    }

    /// Lists stored repositories, optionally for one owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_repos(&self, owner: Option<String>) -> Result<Vec<Repo>, AppError> {
        self.store.list_repos(owner).await
    }

    /// Returns the `limit` most starred repositories, optionally for one owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `limit <= 0`.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn top_repos(&self, owner: Option<String>, limit: i64) -> Result<Vec<Repo>, AppError> {
        self.store.top_repos(owner, limit).await
    }

    /// Checks database connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database is unreachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.store.ping().await
    }
}
