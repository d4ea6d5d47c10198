//! SQLite implementation of the repository store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::Repo;
use crate::domain::repositories::RepoStore;
use crate::error::AppError;

/// SQLite store for repository metadata.
///
/// Every query binds its parameters; connections are taken from the pool per
/// call and returned when the call finishes, including on error.
pub struct SqliteRepoStore {
    pool: Arc<SqlitePool>,
}

impl SqliteRepoStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Counts stored rows, optionally for one owner.
    pub async fn count(&self, owner: Option<String>) -> Result<i64, AppError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM repos WHERE (?1 IS NULL OR owner = ?1)")
                .bind(owner)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(count)
    }
}

#[derive(FromRow)]
struct RepoRow {
    owner: String,
    name: String,
    stars: i64,
    forks: i64,
    language: Option<String>,
    url: String,
    updated_at: DateTime<Utc>,
}

impl From<RepoRow> for Repo {
    fn from(r: RepoRow) -> Self {
        Repo::new(
            r.owner,
            r.name,
            r.stars,
            r.forks,
            r.language,
            r.url,
            r.updated_at,
        )
    }
}

#[async_trait]
impl RepoStore for SqliteRepoStore {
    async fn upsert(&self, repos: Vec<Repo>) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;

        for repo in &repos {
            sqlx::query(
                r#"
                INSERT INTO repos (owner, name, stars, forks, language, url, updated_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                ON CONFLICT (owner, name) DO UPDATE SET
                    stars      = excluded.stars,
                    forks      = excluded.forks,
                    language   = excluded.language,
                    url        = excluded.url,
                    updated_at = excluded.updated_at
                "#,
            )
            .bind(&repo.owner)
            .bind(&repo.name)
            .bind(repo.stars)
            .bind(repo.forks)
            .bind(&repo.language)
            .bind(&repo.url)
            .bind(repo.updated_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(repos.len() as u64)
    }

    async fn list_repos(&self, owner: Option<String>) -> Result<Vec<Repo>, AppError> {
        let rows: Vec<RepoRow> = sqlx::query_as(
            r#"
            SELECT owner, name, stars, forks, language, url, updated_at
            FROM repos
            WHERE (?1 IS NULL OR owner = ?1)
            ORDER BY updated_at DESC, name ASC
            "#,
        )
        .bind(owner)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Repo::from).collect())
    }

    async fn top_repos(&self, owner: Option<String>, limit: i64) -> Result<Vec<Repo>, AppError> {
        if limit <= 0 {
            return Err(AppError::bad_request(
                "Limit must be a positive integer",
                json!({ "limit": limit }),
            ));
        }

        let rows: Vec<RepoRow> = sqlx::query_as(
            r#"
            SELECT owner, name, stars, forks, language, url, updated_at
            FROM repos
            WHERE (?1 IS NULL OR owner = ?1)
            ORDER BY stars DESC, owner ASC, name ASC
            LIMIT ?2
            "#,
        )
        .bind(owner)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Repo::from).collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
