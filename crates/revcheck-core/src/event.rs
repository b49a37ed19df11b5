//! GitHub Actions event context.
//!
//! Read-only view of the triggering event: the event name, the head SHA,
//! and the slice of the webhook payload the gate actually consumes. Built
//! from the standard Actions environment (`GITHUB_EVENT_NAME`,
//! `GITHUB_SHA`, and the JSON document at `GITHUB_EVENT_PATH`), or
//! constructed directly in tests.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CheckError, Result};

/// Event name the gate accepts; anything else is an unsupported trigger.
pub const PULL_REQUEST_EVENT: &str = "pull_request";

/// Payload action for a newly opened pull request.
pub const ACTION_OPENED: &str = "opened";

/// Payload action for a pull request updated with new commits.
pub const ACTION_SYNCHRONIZE: &str = "synchronize";

/// Pull request fields consumed by the gate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PullRequest {
    /// Pull request title, checked against the tag policy.
    pub title: String,

    /// Number of commits on the pull request.
    pub commits: u64,
}

/// Slice of the webhook event payload the gate reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventPayload {
    /// Payload action (`opened`, `synchronize`, ...).
    #[serde(default)]
    pub action: Option<String>,

    /// Head commit after a `synchronize` update.
    #[serde(default)]
    pub after: Option<String>,

    /// The pull request under check.
    #[serde(default)]
    pub pull_request: Option<PullRequest>,
}

/// The triggering event as the gate sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventContext {
    /// Kind of the triggering event (`pull_request`, `push`, ...).
    pub event_name: String,

    /// SHA of the commit that triggered the workflow. For pull_request
    /// events this is the synthetic merge commit.
    pub sha: String,

    /// Deserialized payload slice.
    pub payload: EventPayload,
}

impl EventContext {
    /// Build the context from the GitHub Actions environment.
    ///
    /// # Errors
    ///
    /// `MissingEnv` when `GITHUB_EVENT_NAME`, `GITHUB_SHA`, or
    /// `GITHUB_EVENT_PATH` is unset; `Io`/`Serialization` when the event
    /// file cannot be read or parsed.
    pub fn from_env() -> Result<Self> {
        let event_name = require_env("GITHUB_EVENT_NAME")?;
        let sha = require_env("GITHUB_SHA")?;
        let event_path = require_env("GITHUB_EVENT_PATH")?;
        let payload = read_payload(Path::new(&event_path))?;
        Ok(Self {
            event_name,
            sha,
            payload,
        })
    }

    /// The pull request object, or `MissingPullRequest` if the payload has
    /// none.
    pub fn pull_request(&self) -> Result<&PullRequest> {
        self.payload
            .pull_request
            .as_ref()
            .ok_or(CheckError::MissingPullRequest)
    }
}

fn require_env(var: &str) -> Result<String> {
    std::env::var(var).map_err(|_| CheckError::MissingEnv {
        var: var.to_string(),
    })
}

fn read_payload(path: &Path) -> Result<EventPayload> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Extract the source commit hash from a merge-commit message.
///
/// Scans trimmed lines beginning with `Merge` and returns the first
/// whitespace-delimited token longer than 24 characters, on the assumption
/// that only a commit hash is that long. This is a fragile heuristic tied
/// to the host's merge-commit message format; when no such token exists
/// the caller must treat the run as unparseable rather than guess.
pub fn extract_merge_source_hash(message: &str) -> Option<String> {
    message
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("Merge"))
        .flat_map(|line| line.split_whitespace())
        .find(|word| word.len() > 24)
        .map(str::to_string)
}
