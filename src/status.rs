//! Combined commit status payload.
//!
//! Decoding is lenient: absent fields default instead of failing, so a
//! response without `statuses` reads as an empty list.

use serde::Deserialize;
use std::fmt;

/// Body of `GET /repos/{owner}/{repo}/commits/{sha}/status`.
///
/// Only `statuses` is read; every other field is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CombinedStatusResponse {
    #[serde(default)]
    pub statuses: Vec<StatusEntry>,
}

/// One status context reported against the commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StatusEntry {
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl StatusEntry {
    pub fn new(context: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            context: Some(context.into()),
            state: Some(state.into()),
        }
    }

    /// Typed state, if the entry carried one.
    #[must_use]
    pub fn status_state(&self) -> Option<StatusState> {
        self.state.as_deref().map(StatusState::from)
    }
}

/// State of a status context.
///
/// Parsing is case-sensitive; anything unrecognised is kept verbatim in
/// `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StatusState {
    Success,
    Pending,
    Failure,
    Error,
    Other(String),
}

impl StatusState {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            StatusState::Success => "success",
            StatusState::Pending => "pending",
            StatusState::Failure => "failure",
            StatusState::Error => "error",
            StatusState::Other(raw) => raw,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, StatusState::Success)
    }
}

impl From<&str> for StatusState {
    fn from(raw: &str) -> Self {
        match raw {
            "success" => StatusState::Success,
            "pending" => StatusState::Pending,
            "failure" => StatusState::Failure,
            "error" => StatusState::Error,
            other => StatusState::Other(other.to_string()),
        }
    }
}

impl fmt::Display for StatusState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
