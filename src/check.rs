//! Required status context gate.

use crate::config::CheckRequest;
use crate::github::{GitHubClient, GitHubResult};
use crate::status::{CombinedStatusResponse, StatusEntry, StatusState};
use log::info;
use std::fmt;
use std::process::ExitCode;

/// Result of checking one required context against a combined status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The required context reported `success` (exit 0).
    Passed { context: String },
    /// No entry carried the required context (exit 1).
    Missing { context: String },
    /// The required context reported some other state (exit 1).
    NotSuccessful { context: String, state: StatusState },
}

impl CheckOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, CheckOutcome::Passed { .. })
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            CheckOutcome::Passed { .. } => 0,
            CheckOutcome::Missing { .. } | CheckOutcome::NotSuccessful { .. } => 1,
        }
    }

    /// Write the diagnostic line (stdout on success, stderr otherwise) and
    /// return the process exit code.
    pub fn report(&self) -> ExitCode {
        if self.is_success() {
            println!("{self}");
        } else {
            eprintln!("{self}");
        }
        ExitCode::from(self.exit_code())
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOutcome::Passed { context } => write!(f, "{context} is success"),
            CheckOutcome::Missing { context } => {
                write!(f, "Missing required local status: {context}")
            }
            CheckOutcome::NotSuccessful { context, state } => write!(
                f,
                "Local status {context} is '{state}', expected 'success'"
            ),
        }
    }
}

/// First entry whose context equals `required` exactly. Later duplicates are
/// ignored regardless of their state.
#[must_use]
pub fn find_required<'a>(statuses: &'a [StatusEntry], required: &str) -> Option<&'a StatusEntry> {
    statuses
        .iter()
        .find(|entry| entry.context.as_deref() == Some(required))
}

/// Decide the outcome for `required` from an already fetched payload.
///
/// A matching entry without a `state` counts as missing.
#[must_use]
pub fn evaluate(combined: &CombinedStatusResponse, required: &str) -> CheckOutcome {
    let context = required.to_string();
    match find_required(&combined.statuses, required).and_then(StatusEntry::status_state) {
        Some(StatusState::Success) => CheckOutcome::Passed { context },
        Some(state) => CheckOutcome::NotSuccessful { context, state },
        None => CheckOutcome::Missing { context },
    }
}

/// Fetch the combined status for the requested commit and evaluate it.
pub async fn check(client: &GitHubClient, request: CheckRequest) -> GitHubResult<CheckOutcome> {
    let combined = client
        .get_combined_status(request.repository(), request.commit_sha())
        .await?;

    let outcome = evaluate(&combined, request.required_context());
    info!(
        "{}@{}: required context {:?} -> {:?}",
        request.repository(),
        request.commit_sha(),
        request.required_context(),
        outcome
    );
    Ok(outcome)
}
