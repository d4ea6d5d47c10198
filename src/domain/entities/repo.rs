//! Repo entity representing a GitHub repository snapshot.

use chrono::{DateTime, Utc};

/// Metadata of a GitHub repository as last fetched.
///
/// Identified by `(owner, name)`. A later fetch for the same owner replaces
/// every field of an existing record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repo {
    pub owner: String,
    pub name: String,
    pub stars: i64,
    pub forks: i64,
    pub language: Option<String>,
    pub url: String,
    pub updated_at: DateTime<Utc>,
}

impl Repo {
    /// Creates a new Repo instance.
    pub fn new(
        owner: String,
        name: String,
        stars: i64,
        forks: i64,
        language: Option<String>,
        url: String,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            owner,
            name,
            stars,
            forks,
            language,
            url,
            updated_at,
        }
    }
}
