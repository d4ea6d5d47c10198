//! SQLite repository store.
//!
//! Implements [`crate::domain::repositories::RepoStore`] with SQLx queries
//! against the `repos` table created by `migrations/`.

pub mod sqlite_repo_store;

pub use sqlite_repo_store::SqliteRepoStore;
