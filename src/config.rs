//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and then handed to the
//! components that need it. Nothing reads the environment mid-request.
//!
//! ```bash
//! export DATABASE_URL="sqlite://repos.db?mode=rwc"
//! export GITHUB_TOKEN="ghp_..."
//! ```
//!
//! ## Optional Variables
//!
//! - `DATABASE_URL` - SQLite database (default: `sqlite://repos.db?mode=rwc`)
//! - `GITHUB_TOKEN` - Token for authenticated GitHub requests (5000 req/hr instead of 60)
//! - `GITHUB_API_URL` - GitHub API base URL (default: `https://api.github.com`)
//! - `GITHUB_TIMEOUT_SECS` - Per-request timeout for GitHub calls (default: 20)
//! - `GITHUB_PER_PAGE` - Page size for repository listing, 1-100 (default: 100)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::infrastructure::github::client::{DEFAULT_API_URL, MAX_PER_PAGE};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Bearer token sent with every GitHub request. `None` means anonymous access.
    pub github_token: Option<String>,
    pub github_api_url: String,
    pub github_timeout_secs: u64,
    pub github_per_page: usize,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub db_max_connections: u32,
    pub db_connect_timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://repos.db?mode=rwc".to_string(),
            github_token: None,
            github_api_url: DEFAULT_API_URL.to_string(),
            github_timeout_secs: 20,
            github_per_page: MAX_PER_PAGE,
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            db_max_connections: 5,
            db_connect_timeout: 30,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let github_token = env::var("GITHUB_TOKEN")
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Ok(Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            github_token,
            github_api_url: env::var("GITHUB_API_URL").unwrap_or(defaults.github_api_url),
            github_timeout_secs: parse_var("GITHUB_TIMEOUT_SECS", defaults.github_timeout_secs)?,
            github_per_page: parse_var("GITHUB_PER_PAGE", defaults.github_per_page)?,
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", defaults.db_max_connections)?,
            db_connect_timeout: parse_var("DB_CONNECT_TIMEOUT", defaults.db_connect_timeout)?,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `database_url` is not a `sqlite:` URL
    /// - `github_api_url` is not an absolute http(s) URL
    /// - a timeout, page size or pool size is out of range
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        let api_url = url::Url::parse(&self.github_api_url)
            .with_context(|| format!("GITHUB_API_URL is not a valid URL: '{}'", self.github_api_url))?;
        if api_url.scheme() != "http" && api_url.scheme() != "https" {
            anyhow::bail!(
                "GITHUB_API_URL must use http or https, got '{}'",
                self.github_api_url
            );
        }

        if self.github_timeout_secs == 0 {
            anyhow::bail!("GITHUB_TIMEOUT_SECS must be greater than 0");
        }

        if self.github_per_page == 0 || self.github_per_page > MAX_PER_PAGE {
            anyhow::bail!(
                "GITHUB_PER_PAGE must be between 1 and {}, got {}",
                MAX_PER_PAGE,
                self.github_per_page
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Returns whether GitHub requests are authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.github_token.is_some()
    }

    pub fn github_timeout(&self) -> Duration {
        Duration::from_secs(self.github_timeout_secs)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  GitHub API: {}", self.github_api_url);

        match &self.github_token {
            Some(token) => tracing::info!(
                "  GitHub token: {} (authenticated, 5000 req/hr)",
                mask_token(token)
            ),
            None => tracing::warn!("  GitHub token: not set (anonymous, limited to 60 req/hr)"),
        }

        tracing::info!("  GitHub timeout: {}s", self.github_timeout_secs);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Reads an optional numeric variable, using `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got '{value}'")),
        Err(_) => Ok(default),
    }
}

/// Masks a secret token for logging, keeping only its last four characters.
///
/// - `ghp_abcdefgh1234` → `***1234`
/// - short tokens are fully masked
fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "***".to_string();
    }

    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("***{}", tail)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
