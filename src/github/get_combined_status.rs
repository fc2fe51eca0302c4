//! GitHub commit combined status retrieval operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use crate::status::CombinedStatusResponse;
use log::debug;
use octocrab::Octocrab;
use std::sync::Arc;

/// Route for the combined status of a commit.
pub(crate) fn combined_status_route(repository: &str, sha: &str) -> String {
    format!("/repos/{repository}/commits/{sha}/status")
}

/// Get the combined status for a commit SHA.
///
/// Only the first page is read; pagination is not followed.
pub(crate) fn get_combined_status(
    inner: Arc<Octocrab>,
    repository: impl Into<String>,
    sha: impl Into<String>,
) -> AsyncTask<Result<CombinedStatusResponse, GitHubError>> {
    let route = combined_status_route(&repository.into(), &sha.into());

    spawn_task(async move {
        debug!("GET {route}");

        // Direct GET so raw commit SHAs work and the body decodes leniently
        let combined: CombinedStatusResponse = inner
            .get(route, None::<&()>)
            .await
            .map_err(GitHubError::from)?;

        debug!("received {} status entries", combined.statuses.len());
        Ok(combined)
    })
}

