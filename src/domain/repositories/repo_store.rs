//! Repository trait for persisted repository metadata.

use crate::domain::entities::Repo;
use crate::error::AppError;
use async_trait::async_trait;

/// Number of rows returned by top queries when no limit is given.
pub const DEFAULT_TOP_LIMIT: i64 = 5;

/// Store of repository metadata keyed by `(owner, name)`.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteRepoStore`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_repo_store.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepoStore: Send + Sync {
    /// Inserts each record or overwrites the row sharing its `(owner, name)` key.
    ///
    /// When the input holds the same key more than once, the last record wins.
    /// Returns the number of records written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn upsert(&self, repos: Vec<Repo>) -> Result<u64, AppError>;

    /// Lists stored repositories, optionally restricted to one owner.
    ///
    /// Most recently updated first. An unknown owner yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_repos(&self, owner: Option<String>) -> Result<Vec<Repo>, AppError>;

    /// Returns at most `limit` repositories ordered by stars, highest first.
    ///
    /// Equal star counts are ordered by owner, then name, ascending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `limit <= 0`.
    /// Returns [`AppError::Internal`] on database errors.
    async fn top_repos(&self, owner: Option<String>, limit: i64) -> Result<Vec<Repo>, AppError>;

    /// Checks that the database answers queries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
