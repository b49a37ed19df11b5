//! Error taxonomy for the revcheck gate.
//!
//! Policy violations are NOT errors — they are verdict values (see
//! [`crate::validate`]) aggregated and reported at the top level. Errors
//! here are the fatal conditions: a collaborator failed, the triggering
//! event is out of scope, or required input could not be parsed at all.

/// Fatal failures of a gate run.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("git error: {0}")]
    Git(String),

    #[error("can only be triggered on pull_request, current event={0}")]
    UnsupportedEvent(String),

    #[error("unsupported pull request action: {0}")]
    UnsupportedAction(String),

    #[error("cannot parse a source commit hash from merge commit {sha}")]
    UnparseableMergeHash { sha: String },

    #[error("event payload carries no pull_request object")]
    MissingPullRequest,

    #[error("required environment variable is not set: {var}")]
    MissingEnv { var: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for revcheck operations.
pub type Result<T> = std::result::Result<T, CheckError>;
