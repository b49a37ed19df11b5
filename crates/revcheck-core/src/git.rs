//! Git subprocess collaborator.
//!
//! Thin synchronous wrapper around the `git` binary, scoped to one
//! repository directory. Every invocation is logged (command line at debug,
//! captured output at trace) and non-zero exits map to
//! [`CheckError::Git`] carrying stderr. No timeout is applied; the hosting
//! CI step's time budget is the backstop.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, trace};

use crate::error::{CheckError, Result};

/// Handle on a local git repository.
#[derive(Debug, Clone)]
pub struct GitClient {
    repo_dir: PathBuf,
}

impl GitClient {
    /// Create a client operating in `repo_dir`.
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
        }
    }

    /// The repository directory this client operates in.
    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }

    /// Query the last `count` revision messages on `reference`.
    ///
    /// Runs `git log --pretty=%B%n<separator> -n<count> <reference>`, so the
    /// returned blob carries each message body followed by the separator
    /// sentinel on its own line, ready for
    /// [`crate::parse::split_log_blob`].
    pub fn query_log(&self, reference: &str, count: u64, separator: &str) -> Result<String> {
        let pretty = format!("--pretty=%B%n{separator}");
        let count_arg = format!("-n{count}");
        self.run(&["log", &pretty, &count_arg, reference])
    }

    /// Fetch `remote_spec` (branch, ref, or commit hash) from `origin` into
    /// the local branch `local_branch`.
    pub fn fetch_ref(&self, remote_spec: &str, local_branch: &str) -> Result<()> {
        let refspec = format!("{remote_spec}:{local_branch}");
        self.run(&["fetch", "origin", &refspec])?;
        Ok(())
    }

    /// Full message body of a single commit, `git log -1 --pretty=%B <sha>`.
    pub fn show_message(&self, sha: &str) -> Result<String> {
        self.run(&["log", "-1", "--pretty=%B", sha])
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        debug!(command = %format!("git {}", args.join(" ")), "running git");
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_dir)
            .output()
            .map_err(|e| CheckError::Git(format!("failed to run git: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CheckError::Git(format!(
                "git {} failed: {}",
                args.first().unwrap_or(&"?"),
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        trace!(output = %stdout, "git output");
        Ok(stdout)
    }
}
