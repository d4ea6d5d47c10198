//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`github`] - GitHub REST API client
//! - [`persistence`] - SQLite repository store

pub mod github;
pub mod persistence;
