//! GitHub REST API client for listing a user's repositories.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use url::Url;

use super::models::{GitHubErrorBody, GitHubRepo};
use crate::domain::entities::Repo;
use crate::domain::repositories::{FetchError, RepoFetcher};

/// Public GitHub API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Largest page size accepted by the listing endpoint.
pub const MAX_PER_PAGE: usize = 100;

const USER_AGENT: &str = concat!("repo-analyzer/", env!("CARGO_PKG_VERSION"));

/// GitHub REST API client.
///
/// Sends `Authorization: Bearer <token>` on every request when a token is
/// configured, raising the upstream rate limit from 60 to 5000 requests per hour.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base_url: String,
    token: Option<String>,
    per_page: usize,
}

impl GitHubClient {
    /// Creates a client targeting api.github.com.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the HTTP client cannot be built.
    pub fn new(token: Option<String>, timeout: Duration) -> Result<Self, FetchError> {
        Self::with_base_url(DEFAULT_API_URL, token, timeout)
    }

    /// Creates a client with a custom base URL (GitHub Enterprise or testing).
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the HTTP client cannot be built.
    pub fn with_base_url(
        base_url: &str,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(http_error)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
            per_page: MAX_PER_PAGE,
        })
    }

    /// Overrides the page size, clamped to `1..=100`.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.clamp(1, MAX_PER_PAGE);
        self
    }

    /// Returns whether requests are authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    fn repos_url(&self, username: &str) -> Result<Url, FetchError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["users", username, "repos"]);

        Ok(url)
    }

    /// Fetches a single page of the listing.
    async fn fetch_page(&self, username: &str, page: usize) -> Result<Vec<GitHubRepo>, FetchError> {
        let url = self.repos_url(username)?;

        let mut request = self
            .http
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .query(&[
                ("per_page", self.per_page.to_string()),
                ("page", page.to_string()),
                ("type", "owner".to_string()),
                ("sort", "updated".to_string()),
            ]);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(http_error)?;
        let response = check_response(response, username).await?;

        let body = response.text().await.map_err(http_error)?;
        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

fn http_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        tracing::warn!(error = %e, "GitHub request timed out");
    }
    FetchError::Http(e.to_string())
}

/// Maps non-success responses to [`FetchError`].
async fn check_response(response: Response, username: &str) -> Result<Response, FetchError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let rate_limit_exhausted = response
        .headers()
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "0");

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<GitHubErrorBody>(&body)
        .map(|b| b.message)
        .unwrap_or_else(|_| {
            if body.is_empty() {
                format!("HTTP {}", status.as_u16())
            } else {
                body
            }
        });

    match status {
        StatusCode::NOT_FOUND => Err(FetchError::UserNotFound(username.to_string())),
        StatusCode::UNAUTHORIZED => Err(FetchError::Unauthorized),
        StatusCode::TOO_MANY_REQUESTS => Err(FetchError::RateLimited),
        StatusCode::FORBIDDEN
            if rate_limit_exhausted || message.to_lowercase().contains("rate limit") =>
        {
            Err(FetchError::RateLimited)
        }
        _ => Err(FetchError::Api {
            status: status.as_u16(),
            message,
        }),
    }
}

#[async_trait]
impl RepoFetcher for GitHubClient {
    async fn fetch_all_repos(&self, username: &str) -> Result<Vec<Repo>, FetchError> {
        let mut repos = Vec::new();
        let mut page = 1;

        loop {
            let batch = self.fetch_page(username, page).await?;
            let received = batch.len();
            tracing::debug!(username, page, received, "fetched repository page");

            repos.extend(batch.into_iter().map(Repo::from));

            if received < self.per_page {
                break;
            }
            page += 1;
        }

        tracing::info!(username, total = repos.len(), pages = page, "fetched repositories");
        Ok(repos)
    }
}
