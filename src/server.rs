//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, GitHub client construction and the
//! Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::github::GitHubClient;
use crate::infrastructure::persistence::SqliteRepoStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Opens the SQLite pool described by `config` and applies pending migrations.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or migrated.
pub async fn connect_database(config: &Config) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await
        .with_context(|| format!("Failed to open database '{}'", config.database_url))?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    Ok(pool)
}

/// Builds the GitHub client from the injected configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn github_client(config: &Config) -> Result<GitHubClient> {
    let client = GitHubClient::with_base_url(
        &config.github_api_url,
        config.github_token.clone(),
        config.github_timeout(),
    )
    .context("Failed to build GitHub client")?
    .with_per_page(config.github_per_page);

    tracing::debug!(
        authenticated = client.is_authenticated(),
        per_page = client.per_page(),
        "GitHub client ready"
    );

    Ok(client)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - Apply migrations
/// - GitHub client
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_database(&config).await?;

    let fetcher = github_client(&config)?;

    let store = Arc::new(SqliteRepoStore::new(Arc::new(pool.clone())));
    let state = AppState::new(store, Arc::new(fetcher));

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
