//! Configuration read once from the process environment.

use secrecy::SecretString;
use std::time::Duration;
use thiserror::Error;

pub const REPO_VAR: &str = "REPO";
pub const SHA_VAR: &str = "PR_HEAD_SHA";
pub const TOKEN_VAR: &str = "GH_TOKEN";
pub const REQUIRED_CONTEXT_VAR: &str = "REQUIRED_CONTEXT";
pub const API_URL_VAR: &str = "GITHUB_API_URL";
pub const TIMEOUT_VAR: &str = "REQUEST_TIMEOUT_SECS";

/// Configuration errors. All are fatal and occur before any network call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("environment variable {name} has invalid value {value:?}")]
    InvalidVar { name: &'static str, value: String },
}

/// What to check: one required context on one commit.
///
/// Built once at startup and passed by value into the checker.
#[derive(Clone, Debug)]
pub struct CheckRequest {
    repository: String,
    commit_sha: String,
    credential: SecretString,
    required_context: String,
}

impl CheckRequest {
    pub fn new(
        repository: impl Into<String>,
        commit_sha: impl Into<String>,
        credential: impl Into<String>,
        required_context: impl Into<String>,
    ) -> Self {
        Self {
            repository: repository.into(),
            commit_sha: commit_sha.into(),
            credential: SecretString::new(credential.into()),
            required_context: required_context.into(),
        }
    }

    /// Read `REPO`, `PR_HEAD_SHA`, `GH_TOKEN` and `REQUIRED_CONTEXT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Same as [`CheckRequest::from_env`] with a caller-supplied lookup.
    /// An empty value counts as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            repository: required(&lookup, REPO_VAR)?,
            commit_sha: required(&lookup, SHA_VAR)?,
            credential: SecretString::new(required(&lookup, TOKEN_VAR)?),
            required_context: required(&lookup, REQUIRED_CONTEXT_VAR)?,
        })
    }

    /// `owner/name` of the target repository.
    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn commit_sha(&self) -> &str {
        &self.commit_sha
    }

    /// Bearer token; only readable through `ExposeSecret`.
    pub fn credential(&self) -> &SecretString {
        &self.credential
    }

    pub fn required_context(&self) -> &str {
        &self.required_context
    }
}

/// Optional client settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
    /// API base URI; `None` means api.github.com.
    pub base_uri: Option<String>,
    /// Connect and read timeout; `None` means none.
    pub timeout: Option<Duration>,
}

impl ClientOptions {
    /// Read `GITHUB_API_URL` and `REQUEST_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_uri = optional(&lookup, API_URL_VAR);
        let timeout = match optional(&lookup, TIMEOUT_VAR) {
            None => None,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    return Err(ConfigError::InvalidVar {
                        name: TIMEOUT_VAR,
                        value: raw,
                    });
                }
            },
        };
        Ok(Self { base_uri, timeout })
    }
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn optional<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|value| !value.is_empty())
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, name).ok_or(ConfigError::MissingVar(name))
}
