//! Revision comment validation engine.
//!
//! Applies a [`CheckPolicy`] to normalized revision records and produces
//! pass/fail verdicts with one violation per defect, so an author sees
//! every problem in a single run. The only short-circuit: a bad title
//! skips the mandatory-field check for that same revision, since a record
//! without a recognizable title is unlikely to have a meaningful body.

use serde::{Deserialize, Serialize};

use crate::parse::{normalize_record, split_log_blob};
use crate::policy::CheckPolicy;

// ---------------------------------------------------------------------------
// Rules and violations
// ---------------------------------------------------------------------------

/// A policy rule a revision or pull request can violate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CheckRule {
    /// The title must start with `[tag]` for a known tag.
    TitleTag,
    /// Every mandatory field prefix must open at least one body line.
    MandatoryField { field: String },
    /// The pull request must not exceed the commit-count limit.
    SingleCommit,
    /// The log query must yield at least one revision record.
    NonEmptyLog,
}

/// A single policy violation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Violation {
    /// Which rule was violated.
    pub rule: CheckRule,
    /// Human-readable explanation, surfaced to the PR author.
    pub reason: String,
}

// ---------------------------------------------------------------------------
// Verdicts
// ---------------------------------------------------------------------------

/// Outcome of validating one revision record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordVerdict {
    /// Whether the record passed (no violations).
    pub passed: bool,
    /// Violations found (empty when passed).
    pub violations: Vec<Violation>,
}

impl RecordVerdict {
    fn pass() -> Self {
        Self {
            passed: true,
            violations: Vec::new(),
        }
    }

    fn fail(violations: Vec<Violation>) -> Self {
        Self {
            passed: false,
            violations,
        }
    }
}

/// Aggregate outcome over every revision examined in one run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchVerdict {
    /// Whether every record (and the batch itself) passed.
    pub passed: bool,
    /// Number of revision records submitted to checks.
    pub records_checked: usize,
    /// All violations across all records (empty when passed).
    pub violations: Vec<Violation>,
}

impl BatchVerdict {
    /// Fold another violation into the batch, flipping it to failed.
    pub fn push(&mut self, violation: Violation) {
        self.passed = false;
        self.violations.push(violation);
    }

    /// Summary line suitable for a log or report.
    pub fn message(&self) -> String {
        if self.passed {
            format!("all {} revision(s) passed", self.records_checked)
        } else {
            format!("check failed with {} violation(s)", self.violations.len())
        }
    }
}

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

/// Check that a title starts with `[tag]` for some known tag.
///
/// Matching is case-sensitive and anchored at the start of the title; the
/// first matching tag wins, though which one is irrelevant since the check
/// is boolean. Returns `None` on success.
pub fn validate_title(title: &str, known_tags: &[String]) -> Option<Violation> {
    let matched = known_tags
        .iter()
        .any(|tag| title.starts_with(&format!("[{tag}]")));
    if matched {
        None
    } else {
        Some(Violation {
            rule: CheckRule::TitleTag,
            reason: format!(
                "title '{title}' does not start with a known tag (expected one of: {})",
                known_tags
                    .iter()
                    .map(|t| format!("[{t}]"))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        })
    }
}

/// Check that every required field prefix opens at least one body line.
///
/// Reports ALL missing prefixes, not just the first, so the author fixes
/// them in one pass. Prefix matching is exact and case-sensitive. Empty
/// `body_lines` fails trivially: every prefix is missing.
pub fn validate_fields(body_lines: &[String], required: &[String]) -> Vec<Violation> {
    required
        .iter()
        .filter(|prefix| !body_lines.iter().any(|line| line.starts_with(*prefix)))
        .map(|prefix| Violation {
            rule: CheckRule::MandatoryField {
                field: prefix.clone(),
            },
            reason: format!("missing mandatory field: {prefix}"),
        })
        .collect()
}

/// Validate one normalized revision record against the policy.
///
/// An empty record is a no-op pass: records reduced to zero lines are
/// skipped, never submitted to checks. Otherwise line 0 is the title and
/// the rest is the body; a failed title check short-circuits the field
/// check for this record.
pub fn validate_record(lines: &[String], policy: &CheckPolicy) -> RecordVerdict {
    let Some(title) = lines.first() else {
        return RecordVerdict::pass();
    };

    if let Some(violation) = validate_title(title, &policy.known_tags) {
        return RecordVerdict::fail(vec![violation]);
    }

    let violations = validate_fields(&lines[1..], &policy.mandatory_fields);
    if violations.is_empty() {
        RecordVerdict::pass()
    } else {
        RecordVerdict::fail(violations)
    }
}

/// Validate a raw log blob end to end: split, normalize, check each record.
///
/// The batch fails when the split yields zero records ("no revision
/// comments parsed") or when any record fails. Violations from every
/// record accumulate, each reason prefixed with the revision's position in
/// the blob (0 = most recent).
pub fn validate_all(blob: &str, policy: &CheckPolicy) -> BatchVerdict {
    let records = split_log_blob(blob, &policy.separator);

    let mut verdict = BatchVerdict {
        passed: true,
        records_checked: records.len(),
        violations: Vec::new(),
    };

    if records.is_empty() {
        verdict.push(Violation {
            rule: CheckRule::NonEmptyLog,
            reason: "no revision comments parsed from log output".to_string(),
        });
        return verdict;
    }

    for (index, record) in records.iter().enumerate() {
        let lines = normalize_record(record);
        let record_verdict = validate_record(&lines, policy);
        for violation in record_verdict.violations {
            verdict.push(Violation {
                rule: violation.rule,
                reason: format!("revision {index}: {}", violation.reason),
            });
        }
    }

    verdict
}
