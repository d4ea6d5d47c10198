//! Data access contracts for the domain layer.
//!
//! - [`RepoStore`] - Persistent repository metadata store
//! - [`RepoFetcher`] - Upstream source of repository metadata
//!
//! Implementations live in `crate::infrastructure`. Mock implementations are
//! generated via `mockall` for unit tests.

pub mod repo_fetcher;
pub mod repo_store;

pub use repo_fetcher::{FetchError, RepoFetcher};
pub use repo_store::{DEFAULT_TOP_LIMIT, RepoStore};

#[cfg(test)]
pub use repo_fetcher::MockRepoFetcher;
#[cfg(test)]
pub use repo_store::MockRepoStore;
