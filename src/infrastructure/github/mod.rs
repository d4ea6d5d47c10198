//! GitHub REST API integration.
//!
//! [`GitHubClient`] implements [`crate::domain::repositories::RepoFetcher`]
//! by paging through `GET /users/{username}/repos`.

pub mod client;
pub mod models;


pub use crate::domain::repositories::FetchError;
pub use client::GitHubClient;
