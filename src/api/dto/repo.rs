//! DTOs for repository listing and ranking endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::domain::entities::Repo;
use crate::domain::repositories::DEFAULT_TOP_LIMIT;

/// Largest `limit` accepted by `GET /top`.
pub const MAX_TOP_LIMIT: i64 = 50;

/// Repository object as returned by the API.
#[derive(Debug, Serialize)]
pub struct RepoItem {
    pub owner: String,
    pub name: String,
    pub stars: i64,
    pub forks: i64,
    pub language: Option<String>,
    pub url: String,
    pub updated_at: DateTime<Utc>,
}

impl From<Repo> for RepoItem {
    fn from(r: Repo) -> Self {
        Self {
            owner: r.owner,
            name: r.name,
            stars: r.stars,
            forks: r.forks,
            language: r.language,
            url: r.url,
            updated_at: r.updated_at,
        }
    }
}

/// Query parameters for `GET /repos`.
#[derive(Debug, Default, Deserialize)]
pub struct RepoListQuery {
    pub owner: Option<String>,
}

impl RepoListQuery {
    /// Owner filter, with an empty value treated as absent.
    pub fn owner(&self) -> Option<String> {
        normalize_owner(self.owner.as_deref())
    }
}

/// Query parameters for `GET /top`.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct TopQuery {
    pub owner: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, max = MAX_TOP_LIMIT))]
    pub limit: Option<i64>,
}

impl TopQuery {
    /// Owner filter, with an empty value treated as absent.
    pub fn owner(&self) -> Option<String> {
        normalize_owner(self.owner.as_deref())
    }

    /// Requested limit or the default of 5.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_TOP_LIMIT)
    }
}

fn normalize_owner(owner: Option<&str>) -> Option<String> {
    owner
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
}
