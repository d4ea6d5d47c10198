//! Domain layer containing the repository entity and data access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Traits for the persistent store and the upstream fetcher
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Concrete implementations live in [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
