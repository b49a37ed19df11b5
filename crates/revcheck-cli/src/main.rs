//! revcheck - pull request revision comment gate CLI
//!
//! ## Commands
//!
//! - `gate`: run the full pull-request gate from the GitHub Actions
//!   environment (event name, SHA, event payload file)
//! - `log`: validate the last N revisions on a local ref, no event context
//!   needed (local debugging)
//!
//! Exit code 0 when every check passes, 1 on any violation or error. The
//! top level never panics on collaborator failure; every error is reported
//! through the workflow-command protocol before exiting.

mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use uuid::Uuid;

use revcheck_core::{
    init_tracing, CheckPolicy, EventContext, GitClient, PullRequestGate, VERSION,
};

use report::ActionReporter;

#[derive(Parser)]
#[command(name = "revcheck")]
#[command(version = VERSION)]
#[command(about = "Pull request revision comment gate", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    /// Repository directory to operate in
    #[arg(long, global = true, default_value = ".")]
    repo: PathBuf,

    /// Policy file (JSON); defaults to the built-in policy when omitted
    #[arg(long, global = true)]
    policy: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the pull-request gate from the GitHub Actions environment
    Gate,

    /// Validate the last N revisions on a ref (local debugging)
    Log {
        /// Branch, ref, or commit to read revisions from
        reference: String,

        /// Number of revisions to check
        #[arg(short = 'n', long, default_value = "1")]
        count: u64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    init_tracing(cli.json, level);

    let mut reporter = ActionReporter::new();
    if let Err(e) = run(&cli, &mut reporter) {
        // Catch-all: a collaborator failure must still be reported to the
        // host rather than crash the step silently.
        reporter.set_failed(&e.to_string());
    }

    if reporter.failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(cli: &Cli, reporter: &mut ActionReporter) -> Result<()> {
    let policy = match &cli.policy {
        Some(path) => CheckPolicy::from_json_file(path)?,
        None => CheckPolicy::default(),
    };
    let git = GitClient::new(&cli.repo);

    let verdict = match &cli.command {
        Commands::Gate => {
            let ctx = EventContext::from_env()?;
            let local_branch = format!("pr-check-{}", Uuid::new_v4().simple());
            PullRequestGate::new(&git, &policy).run(&ctx, &local_branch)?
        }
        Commands::Log { reference, count } => {
            info!(reference = %reference, count = count, "checking last revisions");
            let blob = git.query_log(reference, *count, &policy.separator)?;
            revcheck_core::validate_all(&blob, &policy)
        }
    };

    info!(summary = %verdict.message(), "gate finished");
    for violation in &verdict.violations {
        reporter.set_failed(&violation.reason);
    }

    Ok(())
}
