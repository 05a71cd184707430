//! Merge request creation

use crate::error::Result;
use crate::merge::require_branch;
use crate::platform::ProjectService;
use crate::types::{MergeRequestOutcome, MergeRequestPayload};
use tracing::debug;

/// Create a merge request from `source` into `target`
///
/// The title is derived from the branch names and the source branch is
/// marked for removal after merge.
///
/// # Returns
/// [`MergeRequestOutcome::Created`] on 201, [`MergeRequestOutcome::Unexpected`]
/// for other non-error statuses. Error statuses and transport failures are
/// returned as errors.
pub async fn submit_merge_request(
    service: &dyn ProjectService,
    source: &str,
    target: &str,
    assignee: Option<&str>,
) -> Result<MergeRequestOutcome> {
    require_branch("source_branch", source)?;
    require_branch("target_branch", target)?;

    let payload = MergeRequestPayload::new(&service.config().base_url, source, target, assignee);
    let outcome = service.create_merge_request(&payload).await?;
    debug!(code = outcome.code(), "merge request submitted");
    Ok(outcome)
}
