//! Merge request command - open a merge request between two branches

use crate::cli::style::{Stylize, check, cross};
use crate::cli::{Exit, error_reason, missing_argument, print_usage};
use anstream::println;
use gitlab_mr::error::Error;
use gitlab_mr::merge::submit_merge_request;
use gitlab_mr::platform::create_project_service;
use gitlab_mr::{MergeRequest, MergeRequestOutcome, ServiceConfig};

/// Run the merge request command
///
/// `values` are the raw values given after `--merge_request`, bound in order
/// to source branch, target branch and optional assignee.
pub async fn run_merge_request(config: ServiceConfig, values: &[String]) -> Exit {
    let Some(source) = values.first() else {
        return missing_argument("source_branch");
    };
    let Some(target) = values.get(1) else {
        return missing_argument("target_branch");
    };
    let assignee = values.get(2).map(String::as_str);

    let service = match create_project_service(config) {
        Ok(service) => service,
        Err(e) => {
            println!("{}", e.error());
            return not_created();
        }
    };

    match submit_merge_request(service.as_ref(), source, target, assignee).await {
        Ok(MergeRequestOutcome::Created(mr)) => {
            report_created(&mr, source, target);
            Exit::Success
        }
        Ok(MergeRequestOutcome::Unexpected(status)) => {
            println!("Unexpected response code: {status}");
            not_created()
        }
        Err(Error::InvalidArgument(msg)) => {
            println!("{msg}");
            print_usage();
            Exit::Usage
        }
        Err(Error::Status { status }) => {
            println!("The server couldn't fulfill the request.");
            println!("Error code: {status}");
            not_created()
        }
        Err(Error::Http(e)) => {
            println!("We failed to reach a server.");
            println!("Reason: {}", error_reason(&e));
            not_created()
        }
        Err(Error::UrlParse(e)) => {
            println!("We failed to reach a server.");
            println!("Reason: {}", error_reason(&e));
            not_created()
        }
        Err(e) => {
            println!("{}", e.error());
            not_created()
        }
    }
}

fn report_created(mr: &MergeRequest, source: &str, target: &str) {
    match (mr.iid, mr.web_url.as_deref()) {
        (Some(iid), Some(url)) => println!(
            "{} Created merge request !{iid}: {}",
            check(),
            url.emphasis()
        ),
        _ => println!(
            "{} Created merge request {} {}",
            check(),
            source.emphasis(),
            format!("to {target}").muted()
        ),
    }
}

fn not_created() -> Exit {
    println!("{} {}", cross(), "Merge request not created.".error());
    Exit::Failure
}
