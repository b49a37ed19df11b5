//! revcheck core - pull request revision comment validation
//!
//! Validates the commit messages behind a pull request against a
//! contribution policy: an allowed category tag at the start of the title
//! and a set of mandatory labeled sections in the body.
//!
//! The pipeline is one synchronous pass: query the revision log, split the
//! blob on the separator sentinel, normalize each record's lines, and
//! apply the policy checks, aggregating every violation into a single
//! batch verdict.

pub mod error;
pub mod event;
pub mod gate;
pub mod git;
pub mod obs;
pub mod parse;
pub mod policy;
pub mod telemetry;
pub mod validate;

pub use error::{CheckError, Result};
pub use event::{
    extract_merge_source_hash, EventContext, EventPayload, PullRequest, ACTION_OPENED,
    ACTION_SYNCHRONIZE, PULL_REQUEST_EVENT,
};
pub use gate::PullRequestGate;
pub use git::GitClient;
pub use parse::{normalize_record, split_log_blob};
pub use policy::CheckPolicy;
pub use telemetry::init_tracing;
pub use validate::{
    validate_all, validate_fields, validate_record, validate_title, BatchVerdict, CheckRule,
    RecordVerdict, Violation,
};

/// revcheck version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
