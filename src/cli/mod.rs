//! CLI commands
//!
//! Command implementations for the `gitlab-mr` binary. Each command returns
//! an [`Exit`] and `main` turns it into the process exit code.

mod include;
mod merge;
pub mod style;

pub use include::run_include_branch;
pub use merge::run_merge_request;

use anstream::println;
use std::process::ExitCode;

/// Usage text printed for `--help`, missing arguments and bare invocations
pub const USAGE: &str = "\
usage: gitlab-mr --merge_request <source_branch> <target_branch> [assignee]
       gitlab-mr --isIncludeBranch <from_branch> <to_branch>
       gitlab-mr -h | --help

    source_branch - branch to merge from
    target_branch - branch to merge into
    assignee      - user ID to assign the merge request to (optional)
    from_branch   - branch expected to contain the changes
    to_branch     - branch whose changes are checked

Environment:
    GITLAB_HOST_PROJECT    project API URL, e.g. https://gitlab.example.com/api/v4/projects/123
    GITLAB_API_ACCESS_KEY  private access token
    GITLAB_MR_LOG          log filter written to stderr (default: warn)

Return value:
    0 - on success
    1 - if the operation failed
    2 - if a required argument is missing";

/// How a command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Operation succeeded
    Success,
    /// Operation ran and failed
    Failure,
    /// Required argument missing or invalid
    Usage,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        match exit {
            Exit::Success => Self::SUCCESS,
            Exit::Failure => Self::from(1),
            Exit::Usage => Self::from(2),
        }
    }
}

/// Print the usage text
pub fn print_usage() {
    println!("{USAGE}");
}

/// Report a missing positional value and show usage
fn missing_argument(name: &str) -> Exit {
    println!("<{name}> isn't specified");
    print_usage();
    Exit::Usage
}

/// Underlying cause of a transport error, including nested sources
fn error_reason(err: &(dyn std::error::Error + 'static)) -> String {
    let mut reason = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !reason.contains(&text) {
            reason.push_str(": ");
            reason.push_str(&text);
        }
        source = cause.source();
    }
    reason
}
