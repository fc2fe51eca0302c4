//! `check_local_status` - gate a CI pipeline on a GitHub commit status
//!
//! Fetches the combined status of a commit and decides whether one required
//! status context reported `success`. The `check-local-status` binary wires
//! this to the process environment and exit code.

// Module declarations
pub mod check;
pub mod config;
pub mod github;
pub mod runtime;
pub mod status;

// Re-export runtime types
pub use runtime::AsyncTask;

// Re-export GitHub client types
pub use github::{GITHUB_API_VERSION, GITHUB_JSON_MEDIA_TYPE, GitHubClient, GitHubClientBuilder};

// Re-export GitHub error types
pub use github::{GitHubError, GitHubResult};

// Re-export gate types
pub use check::{CheckOutcome, check, evaluate, find_required};
pub use config::{CheckRequest, ClientOptions, ConfigError};
pub use status::{CombinedStatusResponse, StatusEntry, StatusState};
