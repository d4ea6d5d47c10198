//! Business logic services for the application layer.

pub mod repo_service;

pub use repo_service::{FetchSummary, RepoService};
