//! Application layer services implementing business logic.
//!
//! Services consume the domain traits and provide a small API for HTTP
//! handlers and the admin CLI.
//!
//! - [`services::repo_service::RepoService`] - Fetch, store, list and rank repositories

pub mod services;
