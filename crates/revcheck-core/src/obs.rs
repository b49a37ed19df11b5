//! Structured observability hooks for gate runs.
//!
//! Emission helpers for the gate lifecycle plus a `GateSpan` RAII guard
//! that scopes all tracing output to one run. Events go out at `info!`
//! level; filter via `RUST_LOG`.

use tracing::info;

/// RAII guard that enters a gate-scoped tracing span for the duration of a
/// run.
pub struct GateSpan {
    _span: tracing::span::EnteredSpan,
}

impl GateSpan {
    /// Create and enter a span tagged with the triggering event and SHA.
    pub fn enter(event_name: &str, sha: &str) -> Self {
        let span = tracing::info_span!("revcheck.gate", event = %event_name, sha = %sha);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: revision records parsed and submitted to checks.
pub fn emit_revisions_checked(reference: &str, records: usize) {
    info!(event = "gate.revisions_checked", reference = %reference, records = records);
}

/// Emit event: gate evaluation completed with its verdict.
pub fn emit_gate_evaluated(passed: bool, violations: usize) {
    info!(event = "gate.evaluated", passed = passed, violations = violations);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_span_create() {
        // Just ensure GateSpan::enter doesn't panic
        let _span = GateSpan::enter("pull_request", "abc123");
    }
}
