//! CLI administration tool for repo-analyzer.
//!
//! Runs the same fetch, list and ranking operations as the HTTP API directly
//! against the database, without a running server.
//!
//! # Usage
//!
//! ```bash
//! # Fetch and store a user's repositories
//! cargo run --bin admin -- fetch octocat
//!
//! # List stored repositories
//! cargo run --bin admin -- repos --owner octocat
//!
//! # Most starred repositories
//! cargo run --bin admin -- top --limit 10
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server, see [`repo_analyzer::config`].

use repo_analyzer::config::{self, Config};
use repo_analyzer::domain::entities::Repo;
use repo_analyzer::domain::repositories::DEFAULT_TOP_LIMIT;
use repo_analyzer::infrastructure::persistence::SqliteRepoStore;
use repo_analyzer::server::{connect_database, github_client};
use repo_analyzer::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing repo-analyzer.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Fetch a user's repositories from GitHub and store them
    Fetch {
        /// GitHub username
        username: String,
    },

    /// List stored repositories
    Repos {
        /// Only show repositories of this owner
        #[arg(short, long)]
        owner: Option<String>,
    },

    /// Show the most starred repositories
    Top {
        /// Only rank repositories of this owner
        #[arg(short, long)]
        owner: Option<String>,

        /// Number of repositories to show
        #[arg(short, long, default_value_t = DEFAULT_TOP_LIMIT)]
        limit: i64,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = connect_database(&config).await?;
    let store = Arc::new(SqliteRepoStore::new(Arc::new(pool.clone())));

    let result = match cli.command {
        Commands::Fetch { username } => fetch(&config, store, &username).await,
        Commands::Repos { owner } => list(&config, store, owner).await,
        Commands::Top { owner, limit } => top(&config, store, owner, limit).await,
        Commands::Db {
            action: DbAction::Check,
        } => db_check(store).await,
    };

    pool.close().await;
    result
}

fn state(config: &Config, store: Arc<SqliteRepoStore>) -> Result<AppState> {
    let fetcher = github_client(config)?;
    Ok(AppState::new(store, Arc::new(fetcher)))
}

/// Fetches and stores a user's repositories.
async fn fetch(config: &Config, store: Arc<SqliteRepoStore>, username: &str) -> Result<()> {
    println!(
        "{} {}",
        "📥 Fetching repositories of".bright_blue().bold(),
        username.bold()
    );

    if !config.is_authenticated() {
        println!(
            "{}",
            "⚠️  GITHUB_TOKEN not set, limited to 60 requests per hour".yellow()
        );
    }

    let summary = state(config, store)?
        .repo_service
        .fetch_and_store(username)
        .await
        .with_context(|| format!("Failed to fetch repositories of '{username}'"))?;

    println!(
        "{} fetched {}, written {}",
        "✓".green().bold(),
        summary.fetched.to_string().bold(),
        summary.written.to_string().bold()
    );

    Ok(())
}

/// Prints stored repositories.
async fn list(config: &Config, store: Arc<SqliteRepoStore>, owner: Option<String>) -> Result<()> {
    let repos = state(config, store)?
        .repo_service
        .list_repos(owner)
        .await
        .context("Failed to list repositories")?;

    print_repos(&repos);
    Ok(())
}

/// Prints the most starred repositories.
async fn top(
    config: &Config,
    store: Arc<SqliteRepoStore>,
    owner: Option<String>,
    limit: i64,
) -> Result<()> {
    let repos = state(config, store)?
        .repo_service
        .top_repos(owner, limit)
        .await
        .context("Failed to rank repositories")?;

    print_repos(&repos);
    Ok(())
}

/// Checks the database connection and reports the stored row count.
async fn db_check(store: Arc<SqliteRepoStore>) -> Result<()> {
    println!("{}", "🔍 Checking database connection...".bright_blue());

    let total = store.count(None).await.context("Database check failed")?;

    println!("{}", "✓ Database connection OK".green().bold());
    println!("  Stored repositories: {}", total.to_string().bold());
    Ok(())
}

fn print_repos(repos: &[Repo]) {
    if repos.is_empty() {
        println!("{}", "No repositories found".yellow());
        return;
    }

    println!(
        "{:<20} {:<30} {:>7} {:>6} {:<12} {}",
        "OWNER".bold(),
        "NAME".bold(),
        "STARS".bold(),
        "FORKS".bold(),
        "LANGUAGE".bold(),
        "UPDATED".bold()
    );

    for repo in repos {
        println!(
            "{:<20} {:<30} {:>7} {:>6} {:<12} {}",
            repo.owner,
            repo.name.cyan(),
            repo.stars.to_string().yellow(),
            repo.forks,
            repo.language.as_deref().unwrap_or("-"),
            repo.updated_at.format("%Y-%m-%d").to_string().dimmed()
        );
    }

    println!();
    println!("{} {}", "Total:".bold(), repos.len());
}
