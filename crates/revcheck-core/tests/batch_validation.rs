//! End-to-end validation scenarios over raw log blobs.

use revcheck_core::{validate_all, CheckPolicy, CheckRule};

fn policy() -> CheckPolicy {
    CheckPolicy::default()
}

#[test]
fn well_formed_revision_passes() {
    let p = policy();
    let blob = format!(
        "[GC] fix leak\nSummary: fixes a leak\nTest Plan: unit test\n\
         Reviewed-by: alice\nIssue: JDK-1\n{}",
        p.separator
    );
    let verdict = validate_all(&blob, &p);
    assert!(verdict.passed, "violations: {:?}", verdict.violations);
    assert_eq!(verdict.records_checked, 1);
}

#[test]
fn untagged_title_short_circuits_field_checks() {
    let p = policy();
    // Missing three mandatory fields too, but only the title violation may
    // surface: a bad title skips the field check for that revision.
    let blob = format!("fix leak\nSummary: x\n{}", p.separator);
    let verdict = validate_all(&blob, &p);
    assert!(!verdict.passed);
    assert_eq!(verdict.violations.len(), 1);
    assert_eq!(verdict.violations[0].rule, CheckRule::TitleTag);
}

#[test]
fn empty_blob_fails_with_no_revisions_parsed() {
    let verdict = validate_all("", &policy());
    assert!(!verdict.passed);
    assert_eq!(verdict.records_checked, 0);
    assert_eq!(verdict.violations.len(), 1);
    assert_eq!(verdict.violations[0].rule, CheckRule::NonEmptyLog);
    assert!(verdict.violations[0].reason.contains("no revision comments"));
}

#[test]
fn violations_accumulate_across_revisions() {
    let p = policy();
    let blob = format!(
        "[JIT] compile faster\nSummary: a\nTest Plan: b\nReviewed-by: c\n{sep}\
         bad title\n{sep}\
         [RAS] resilience\nSummary: only summary\n{sep}",
        sep = p.separator
    );
    let verdict = validate_all(&blob, &p);
    assert!(!verdict.passed);
    assert_eq!(verdict.records_checked, 3);

    // revision 0: missing Issue:, revision 1: bad title,
    // revision 2: missing three fields.
    assert_eq!(verdict.violations.len(), 5);
    assert!(verdict.violations.iter().any(|v| v.reason.starts_with("revision 0:")));
    assert!(verdict.violations.iter().any(|v| v.reason.starts_with("revision 1:")));
    assert_eq!(
        verdict
            .violations
            .iter()
            .filter(|v| v.reason.starts_with("revision 2:"))
            .count(),
        3
    );
}

#[test]
fn whitespace_only_record_is_skipped_not_failed() {
    let p = policy();
    // Trailing newline after the final separator survives the split as a
    // whitespace-only segment, then normalizes to zero lines and is
    // skipped.
    let blob = format!(
        "[Misc] tidy\nSummary: s\nTest Plan: t\nReviewed-by: r\nIssue: i\n{}\n",
        p.separator
    );
    let verdict = validate_all(&blob, &p);
    assert!(verdict.passed, "violations: {:?}", verdict.violations);
    assert_eq!(verdict.records_checked, 2);
}

#[test]
fn custom_policy_tags_and_fields_apply() {
    let p = CheckPolicy {
        known_tags: vec!["Docs".to_string()],
        mandatory_fields: vec!["Signed-off-by:".to_string()],
        ..CheckPolicy::default()
    };
    let blob = format!("[Docs] update readme\nSigned-off-by: dev\n{}", p.separator);
    let verdict = validate_all(&blob, &p);
    assert!(verdict.passed);

    let blob = format!("[GC] not allowed here\nSigned-off-by: dev\n{}", p.separator);
    let verdict = validate_all(&blob, &p);
    assert!(!verdict.passed);
}
