//! GitHub API error types

use thiserror::Error;

/// Error types for GitHub API operations
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Octocrab library error: transport failures, non-2xx responses and
    /// undecodable bodies all surface here.
    #[error("Octocrab error: {0}")]
    Octocrab(#[from] octocrab::Error),

    /// Client setup/configuration error
    #[error("Client setup failed: {0}")]
    ClientSetup(String),

    /// The spawned request task ended without reporting a result
    #[error("Task channel error: {0}")]
    TaskChannel(#[from] tokio::sync::oneshot::error::RecvError),
}

/// Convenience result alias for GitHub operations
pub type GitHubResult<T> = Result<T, GitHubError>;
