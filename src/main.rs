// CI gate: exits 0 when REQUIRED_CONTEXT reported success on PR_HEAD_SHA in REPO.
//
// Configuration and request failures propagate out of main and exit non-zero.

use anyhow::{Context, Result};
use check_local_status::{CheckRequest, ClientOptions, GitHubClient, check};
use log::debug;
use secrecy::ExposeSecret;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let request = CheckRequest::from_env()?;
    let options = ClientOptions::from_env()?;
    debug!("{request:?} {options:?}");

    let mut builder = GitHubClient::builder().personal_token(request.credential().expose_secret());
    if let Some(uri) = options.base_uri {
        builder = builder.base_uri(uri);
    }
    if let Some(timeout) = options.timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build().context("Failed to create GitHub client")?;

    let outcome = check(&client, request)
        .await
        .context("Failed to fetch combined commit status")?;

    Ok(outcome.report())
}
