//! Pull-request gate orchestration.
//!
//! Ties the collaborators together: trigger check, pull-request-level
//! policy checks, fetching the source commits into a local branch, and
//! validating the revision comments found there. Policy violations
//! accumulate into one [`BatchVerdict`]; only out-of-scope triggers and
//! collaborator failures abort the run as errors.

use tracing::info;

use crate::error::{CheckError, Result};
use crate::event::{
    extract_merge_source_hash, EventContext, ACTION_OPENED, ACTION_SYNCHRONIZE,
    PULL_REQUEST_EVENT,
};
use crate::git::GitClient;
use crate::obs::{emit_gate_evaluated, emit_revisions_checked, GateSpan};
use crate::policy::CheckPolicy;
use crate::validate::{validate_all, validate_title, BatchVerdict, CheckRule, Violation};

/// The revision comment gate for one pull request.
pub struct PullRequestGate<'a> {
    git: &'a GitClient,
    policy: &'a CheckPolicy,
}

impl<'a> PullRequestGate<'a> {
    /// Create a gate over a repository with a given policy.
    pub fn new(git: &'a GitClient, policy: &'a CheckPolicy) -> Self {
        Self { git, policy }
    }

    /// Run the full gate for the triggering event.
    ///
    /// `local_branch` is a caller-supplied unique name for the branch the
    /// source commits are fetched into; injecting it keeps runs
    /// deterministic under test.
    ///
    /// # Errors
    ///
    /// Fatal conditions only: non-pull_request trigger, unsupported
    /// action, unparseable merge-commit hash, missing pull_request
    /// payload, or a git failure. Policy violations are returned inside
    /// the verdict, never as errors.
    pub fn run(&self, ctx: &EventContext, local_branch: &str) -> Result<BatchVerdict> {
        if ctx.event_name != PULL_REQUEST_EVENT {
            return Err(CheckError::UnsupportedEvent(ctx.event_name.clone()));
        }

        let _span = GateSpan::enter(&ctx.event_name, &ctx.sha);

        // PR-level checks first; their violations ride along with the
        // per-revision ones rather than stopping the run.
        let mut pr_violations = self.check_pull_request(ctx)?;

        self.fetch_source(ctx, local_branch)?;

        let blob = self
            .git
            .query_log(local_branch, self.policy.max_commits, &self.policy.separator)?;
        let mut verdict = validate_all(&blob, self.policy);
        emit_revisions_checked(local_branch, verdict.records_checked);

        for violation in pr_violations.drain(..) {
            verdict.push(violation);
        }

        emit_gate_evaluated(verdict.passed, verdict.violations.len());
        Ok(verdict)
    }

    /// Commit-count and title checks on the pull request object itself.
    fn check_pull_request(&self, ctx: &EventContext) -> Result<Vec<Violation>> {
        let pr = ctx.pull_request()?;
        let mut violations = Vec::new();

        if pr.commits != self.policy.max_commits {
            violations.push(Violation {
                rule: CheckRule::SingleCommit,
                reason: format!(
                    "pull request has {} commits, expected exactly {}",
                    pr.commits, self.policy.max_commits
                ),
            });
        }

        if let Some(violation) = validate_title(&pr.title, &self.policy.known_tags) {
            violations.push(Violation {
                rule: violation.rule,
                reason: format!("pull request {}", violation.reason),
            });
        }

        Ok(violations)
    }

    /// Materialize the pull request's source commits as `local_branch`.
    ///
    /// On `opened` the source hash is not in the payload; it is recovered
    /// from the merge commit the host created at `ctx.sha`. On
    /// `synchronize` the payload's `after` field carries it directly.
    fn fetch_source(&self, ctx: &EventContext, local_branch: &str) -> Result<()> {
        let action = ctx.payload.action.as_deref().unwrap_or_default();
        let source = match action {
            ACTION_OPENED => {
                let message = self.git.show_message(&ctx.sha)?;
                extract_merge_source_hash(&message).ok_or_else(|| {
                    CheckError::UnparseableMergeHash {
                        sha: ctx.sha.clone(),
                    }
                })?
            }
            ACTION_SYNCHRONIZE => {
                ctx.payload
                    .after
                    .clone()
                    .ok_or_else(|| CheckError::UnsupportedAction(
                        "synchronize event without an 'after' commit".to_string(),
                    ))?
            }
            other => return Err(CheckError::UnsupportedAction(other.to_string())),
        };

        info!(source = %source, branch = %local_branch, "fetching pull request source");
        self.git.fetch_ref(&source, local_branch)
    }
}
