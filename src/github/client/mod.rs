//! GitHub API client wrapper
//!
//! Provides a clean API for the commit status lookup without exposing Octocrab.
//!
//! # Examples
//!
//! ```rust,no_run
//! use check_local_status::GitHubClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gh = GitHubClient::with_token("ghp_...")?;
//!     let combined = gh.get_combined_status("owner/repo", "deadbeef").await?;
//!     println!("{} statuses", combined.statuses.len());
//!     Ok(())
//! }
//! ```

use crate::github::error::{GitHubError, GitHubResult};
use http::header::{ACCEPT, HeaderName};
use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;
use std::sync::Arc;
use std::time::Duration;

mod repositories;

/// Media type selecting GitHub's JSON representation.
pub const GITHUB_JSON_MEDIA_TYPE: &str = "application/vnd.github+json";

/// REST API version every request is pinned to.
pub const GITHUB_API_VERSION: &str = "2022-11-28";

const API_VERSION_HEADER: &str = "x-github-api-version";

/// GitHub API client wrapper that encapsulates Octocrab.
///
/// Cloning is cheap (Arc clone).
#[derive(Clone, Debug)]
pub struct GitHubClient {
    inner: Arc<Octocrab>,
}

impl GitHubClient {
    /// Create a new client builder
    #[must_use]
    pub fn builder() -> GitHubClientBuilder {
        GitHubClientBuilder::new()
    }

    /// Convenience: create client with personal access token
    pub fn with_token(token: impl Into<String>) -> GitHubResult<Self> {
        Self::builder().personal_token(token).build()
    }
}

/// Builder for creating `GitHubClient`
///
/// Every built client sends bearer authorization (when a token is set), the
/// GitHub JSON `Accept` header and a pinned `X-GitHub-Api-Version`. Failed
/// requests are never retried.
pub struct GitHubClientBuilder {
    token: Option<String>,
    base_uri: Option<String>,
    timeout: Option<Duration>,
}

impl GitHubClientBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: None,
            base_uri: None,
            timeout: None,
        }
    }

    /// Set personal access token, sent as `Authorization: Bearer <token>`
    pub fn personal_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set base URI (for GitHub Enterprise)
    pub fn base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }

    /// Apply a connect and read timeout. Without one a request may block
    /// indefinitely.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the `GitHubClient`
    pub fn build(self) -> GitHubResult<GitHubClient> {
        let mut builder = Octocrab::builder()
            .add_header(ACCEPT, GITHUB_JSON_MEDIA_TYPE.to_string())
            .add_header(
                HeaderName::from_static(API_VERSION_HEADER),
                GITHUB_API_VERSION.to_string(),
            )
            .add_retry_config(RetryConfig::None);

        if let Some(token) = self.token {
            builder = builder.personal_token(token);
        }

        if let Some(uri) = self.base_uri {
            builder = builder
                .base_uri(&uri)
                .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;
        }

        if let Some(timeout) = self.timeout {
            builder = builder
                .set_connect_timeout(Some(timeout))
                .set_read_timeout(Some(timeout));
        }

        let octocrab = builder
            .build()
            .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;

        Ok(GitHubClient {
            inner: Arc::new(octocrab),
        })
    }
}

impl Default for GitHubClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
