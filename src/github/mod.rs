//! GitHub API operations module
//!
//! Provides the commit status lookup using the octocrab library.

pub mod client;
pub mod error;
pub mod util;

// Re-export client types
pub use client::{GITHUB_API_VERSION, GITHUB_JSON_MEDIA_TYPE, GitHubClient, GitHubClientBuilder};

// Re-export error types
pub use error::{GitHubError, GitHubResult};
pub use util::spawn_task;

// GitHub API operations - Repositories (internal)
pub(crate) mod get_combined_status;
