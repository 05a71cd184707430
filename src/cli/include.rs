//! Inclusion check command - verify one branch already contains another

use crate::cli::style::{Stylize, check, cross};
use crate::cli::{Exit, error_reason, missing_argument, print_usage};
use anstream::println;
use gitlab_mr::ServiceConfig;
use gitlab_mr::error::Error;
use gitlab_mr::merge::is_branch_included;
use gitlab_mr::platform::create_project_service;

/// Run the inclusion check command
///
/// `values` are the raw values given after `--isIncludeBranch`, bound in
/// order to the from and to branches. Succeeds only when every change on
/// the to branch is already part of the from branch.
pub async fn run_include_branch(config: ServiceConfig, values: &[String]) -> Exit {
    let Some(from) = values.first() else {
        return missing_argument("from_branch");
    };
    let Some(to) = values.get(1) else {
        return missing_argument("to_branch");
    };

    let service = match create_project_service(config) {
        Ok(service) => service,
        Err(e) => {
            println!("{}", e.error());
            return Exit::Failure;
        }
    };

    match is_branch_included(service.as_ref(), from, to).await {
        Ok(true) => {
            println!(
                "{} Changes from {} branch are included in {} branch.",
                check(),
                to.emphasis(),
                from.emphasis()
            );
            Exit::Success
        }
        Ok(false) => {
            println!(
                "{} {}",
                cross(),
                format!("Changes from {to} branch are not included in {from} branch.").error()
            );
            Exit::Failure
        }
        Err(Error::InvalidArgument(msg)) => {
            println!("{msg}");
            print_usage();
            Exit::Usage
        }
        Err(Error::Status { status }) => {
            println!("Error receiving data {status}");
            Exit::Failure
        }
        Err(Error::Http(e)) => {
            println!("Error. We failed to reach a server:");
            println!("{}", error_reason(&e));
            Exit::Failure
        }
        Err(Error::UrlParse(e)) => {
            println!("Error. We failed to reach a server:");
            println!("{}", error_reason(&e));
            Exit::Failure
        }
        Err(Error::Json(e)) => {
            println!("Error. Unable to parse compare response: {e}");
            Exit::Failure
        }
        Err(e) => {
            println!("{}", e.error());
            Exit::Failure
        }
    }
}
