//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::RepoService;
use crate::infrastructure::github::GitHubClient;
use crate::infrastructure::persistence::SqliteRepoStore;

/// Repository service wired to its production collaborators.
pub type AppRepoService = RepoService<SqliteRepoStore, GitHubClient>;

/// State cloned into each request.
///
/// Holds the storage handle and the configured GitHub client through the
/// service; nothing here is read from the environment mid-request.
#[derive(Clone)]
pub struct AppState {
    pub repo_service: Arc<AppRepoService>,
}

impl AppState {
    pub fn new(store: Arc<SqliteRepoStore>, fetcher: Arc<GitHubClient>) -> Self {
        Self {
            repo_service: Arc::new(RepoService::new(store, fetcher)),
        }
    }
}
