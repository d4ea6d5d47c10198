//! Core domain entities.
//!
//! - [`Repo`] - Metadata of a single GitHub repository at fetch time

pub mod repo;

pub use repo::Repo;
