//! Splitting and normalization of raw `git log` output.
//!
//! A log query emits every revision's message followed by a separator
//! sentinel (see [`crate::policy::CheckPolicy::separator`]). This module
//! turns that single text blob into per-revision line sequences ready for
//! validation. Both functions are pure and total.

/// Split a raw log blob into per-revision segments.
///
/// Splits on every occurrence of `separator` and drops segments that are
/// zero-length after the split. A segment consisting only of whitespace is
/// NOT dropped here; it only disappears later when [`normalize_record`]
/// filters its lines. Order is preserved (most-recent-first, as `git log`
/// emits it). An empty blob yields an empty vec, never an error.
pub fn split_log_blob(blob: &str, separator: &str) -> Vec<String> {
    blob.split(separator)
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_string())
        .collect()
}

/// Normalize one revision segment into its surviving lines.
///
/// Splits on line breaks, trims surrounding whitespace from each line, and
/// drops lines that become empty. Relative order of surviving lines is
/// preserved. An all-blank segment yields an empty vec.
///
/// Idempotent: feeding the joined output back through produces the same
/// lines.
pub fn normalize_record(record: &str) -> Vec<String> {
    record
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEP: &str = "###";

    #[test]
    fn test_split_counts_segments() {
        let blob = format!("first\n{SEP}second\n{SEP}third\n{SEP}");
        let records = split_log_blob(&blob, SEP);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], "first\n");
        assert_eq!(records[2], "third\n");
    }

    #[test]
    fn test_split_preserves_order() {
        let blob = format!("newest{SEP}older{SEP}oldest{SEP}");
        let records = split_log_blob(&blob, SEP);
        assert_eq!(records, vec!["newest", "older", "oldest"]);
    }

    #[test]
    fn test_split_drops_zero_length_segments_only() {
        // Adjacent separators produce a zero-length segment; whitespace-only
        // segments survive this stage.
        let blob = format!("{SEP}{SEP}  \n{SEP}");
        let records = split_log_blob(&blob, SEP);
        assert_eq!(records, vec!["  \n"]);
    }

    #[test]
    fn test_split_empty_blob_is_empty() {
        assert!(split_log_blob("", SEP).is_empty());
    }

    #[test]
    fn test_normalize_trims_and_filters() {
        let lines = normalize_record("  [GC] fix leak  \n\n   \nSummary: x\n");
        assert_eq!(lines, vec!["[GC] fix leak", "Summary: x"]);
    }

    #[test]
    fn test_normalize_all_blank_is_empty() {
        assert!(normalize_record(" \n\t\n  ").is_empty());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_record("  a \n b\n\n c ");
        let again = normalize_record(&once.join("\n"));
        assert_eq!(once, again);
    }
}
