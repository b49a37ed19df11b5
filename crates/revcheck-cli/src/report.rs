//! GitHub Actions failure reporting.
//!
//! Mirrors the `core.setFailed` collaborator: each failure is emitted as
//! an `::error::` workflow command on stdout, which the host renders as an
//! annotation and aggregates. Multiple reports per run are fine; the run's
//! exit code carries the final verdict.

/// Collects failure reports and remembers whether any occurred.
#[derive(Debug, Default)]
pub struct ActionReporter {
    failed: bool,
}

impl ActionReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report one failure to the host.
    pub fn set_failed(&mut self, message: &str) {
        self.failed = true;
        println!("::error::{}", escape(message));
    }

    /// Whether any failure was reported.
    pub fn failed(&self) -> bool {
        self.failed
    }
}

/// Escape a message per the workflow-command protocol: the command ends at
/// the first newline, so line breaks and `%` must be encoded.
fn escape(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
