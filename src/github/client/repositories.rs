//! Repositories API methods

use super::GitHubClient;
use crate::github::error::GitHubResult;
use crate::status::CombinedStatusResponse;

impl GitHubClient {
    /// Get the combined status for a commit.
    ///
    /// `repository` is the `owner/name` pair; neither it nor `sha` is validated.
    /// Both transport failures and a dropped task surface as `GitHubError`.
    pub async fn get_combined_status(
        &self,
        repository: impl Into<String>,
        sha: impl Into<String>,
    ) -> GitHubResult<CombinedStatusResponse> {
        crate::github::get_combined_status::get_combined_status(
            self.inner.clone(),
            repository,
            sha,
        )
        .await?
    }
}
