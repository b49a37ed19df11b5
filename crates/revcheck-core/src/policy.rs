//! Validation policy configuration.
//!
//! Which title tags are allowed, which body fields are mandatory, and how
//! revisions are delimited in log output. Defaults match the historical
//! hard-coded policy; a policy can also be loaded from a JSON file so the
//! rules evolve without code changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Separator sentinel appended after each revision's message in the log
/// query. 27 repeated `#` characters: long and distinctive enough not to
/// collide with real commit content.
pub const REV_SEPARATOR_LEN: usize = 27;

/// Contribution policy applied to every revision under check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckPolicy {
    /// Allowed bracketed category tags; a title must start with `[tag]`.
    pub known_tags: Vec<String>,

    /// Line prefixes that must each appear on at least one body line.
    pub mandatory_fields: Vec<String>,

    /// Sentinel delimiting concatenated revision records in log output.
    pub separator: String,

    /// Maximum number of commits allowed per pull request.
    pub max_commits: u64,
}

impl Default for CheckPolicy {
    fn default() -> Self {
        Self {
            known_tags: ["Misc", "GC", "MultiTenant", "JWarmUp", "RAS", "JIT", "JFR"]
                .into_iter()
                .map(String::from)
                .collect(),
            mandatory_fields: ["Summary:", "Test Plan:", "Reviewed-by:", "Issue:"]
                .into_iter()
                .map(String::from)
                .collect(),
            separator: "#".repeat(REV_SEPARATOR_LEN),
            max_commits: 1,
        }
    }
}

impl CheckPolicy {
    /// Load a policy from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not deserialize
    /// into a complete policy.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Add an allowed title tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.known_tags.push(tag.into());
        self
    }

    /// Add a mandatory body field prefix.
    pub fn with_field(mut self, prefix: impl Into<String>) -> Self {
        self.mandatory_fields.push(prefix.into());
        self
    }

    /// Override the commit-count limit.
    pub fn with_max_commits(mut self, max_commits: u64) -> Self {
        self.max_commits = max_commits;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = CheckPolicy::default();
        assert!(policy.known_tags.contains(&"GC".to_string()));
        assert!(policy.known_tags.contains(&"JWarmUp".to_string()));
        assert_eq!(policy.mandatory_fields.len(), 4);
        assert_eq!(policy.separator.len(), REV_SEPARATOR_LEN);
        assert!(policy.separator.chars().all(|c| c == '#'));
        assert_eq!(policy.max_commits, 1);
    }

    #[test]
    fn test_builder_helpers() {
        let policy = CheckPolicy::default()
            .with_tag("Docs")
            .with_field("Signed-off-by:")
            .with_max_commits(3);
        assert!(policy.known_tags.contains(&"Docs".to_string()));
        assert!(policy
            .mandatory_fields
            .contains(&"Signed-off-by:".to_string()));
        assert_eq!(policy.max_commits, 3);
    }

    #[test]
    fn test_json_round_trip() {
        let policy = CheckPolicy::default().with_tag("Docs");
        let json = serde_json::to_string(&policy).unwrap();
        let back: CheckPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(policy, back);
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.json");
        let policy = CheckPolicy::default().with_max_commits(2);
        std::fs::write(&path, serde_json::to_string(&policy).unwrap()).unwrap();

        let loaded = CheckPolicy::from_json_file(&path).unwrap();
        assert_eq!(loaded, policy);
    }

    #[test]
    fn test_from_json_file_missing() {
        assert!(CheckPolicy::from_json_file("/nonexistent/policy.json").is_err());
    }
}
