//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod fetch;
pub mod health;
pub mod index;
pub mod repos;
pub mod top;

pub use fetch::fetch_handler;
pub use health::health_handler;
pub use index::index_handler;
pub use repos::repos_handler;
pub use top::top_handler;
