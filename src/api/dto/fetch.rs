//! DTOs for the fetch endpoint.

use serde::Serialize;

use crate::application::services::FetchSummary;

/// Result of fetching and storing an account's repositories.
#[derive(Debug, Serialize)]
pub struct FetchResponse {
    pub owner: String,
    pub fetched: usize,
    pub written: u64,
}

impl From<FetchSummary> for FetchResponse {
    fn from(s: FetchSummary) -> Self {
        Self {
            owner: s.owner,
            fetched: s.fetched,
            written: s.written,
        }
    }
}
