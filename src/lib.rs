//! # Repo Analyzer
//!
//! Fetches a GitHub user's public repositories, stores their metadata in a
//! local SQLite database and ranks them over HTTP. Built with Axum and SQLx.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The [`domain::entities::Repo`] entity and store/fetcher traits
//! - **Application Layer** ([`application`]) - [`application::services::RepoService`]
//! - **Infrastructure Layer** ([`infrastructure`]) - GitHub REST client and SQLite store
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! - `GET /fetch/{username}` - Fetch all repositories of a user and upsert them
//! - `GET /repos?owner=` - List stored repositories
//! - `GET /top?owner=&limit=` - Most starred repositories (default limit 5)
//!
//! ## Quick Start
//!
//! ```bash
//! export GITHUB_TOKEN="ghp_..."   # Optional, raises the GitHub rate limit
//! cargo run
//! curl localhost:3000/fetch/octocat
//! curl "localhost:3000/top?owner=octocat&limit=3"
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{FetchSummary, RepoService};
    pub use crate::domain::entities::Repo;
    pub use crate::domain::repositories::{FetchError, RepoFetcher, RepoStore};
    pub use crate::error::AppError;
    pub use crate::infrastructure::github::GitHubClient;
    pub use crate::infrastructure::persistence::SqliteRepoStore;
    pub use crate::state::AppState;
}
