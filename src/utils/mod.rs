//! Helper functions shared across layers.
//!
//! - [`username`] - GitHub login validation

pub mod username;
