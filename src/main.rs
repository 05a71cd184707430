//! gitlab-mr - merge request helpers for GitLab
//!
//! CLI binary for creating merge requests and checking branch inclusion.

use clap::Parser;
use gitlab_mr::ServiceConfig;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

/// Environment variable holding the log filter
const LOG_ENV: &str = "GITLAB_MR_LOG";

#[derive(Parser)]
#[command(name = "gitlab-mr")]
#[command(about = "Create GitLab merge requests and check branch inclusion")]
#[command(version, disable_help_flag = true)]
struct Cli {
    /// Show usage
    #[arg(short, long)]
    help: bool,

    /// Create a merge request: <source_branch> <target_branch> [assignee]
    #[arg(long = "merge_request", num_args = 0.., value_name = "BRANCH")]
    merge_request: Option<Vec<String>>,

    /// Check that <to_branch> is included in <from_branch>: <from_branch> <to_branch>
    #[arg(long = "isIncludeBranch", num_args = 0.., value_name = "BRANCH")]
    is_include_branch: Option<Vec<String>>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    if cli.help {
        cli::print_usage();
        return ExitCode::SUCCESS;
    }

    let config = ServiceConfig::from_env();
    tracing::debug!(?config, "loaded configuration");

    let exit = if let Some(values) = cli.merge_request {
        cli::run_merge_request(config, &values).await
    } else if let Some(values) = cli.is_include_branch {
        cli::run_include_branch(config, &values).await
    } else {
        cli::print_usage();
        cli::Exit::Success
    };

    exit.into()
}
