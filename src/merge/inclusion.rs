//! Branch inclusion check

use crate::error::Result;
use crate::merge::require_branch;
use crate::platform::ProjectService;

/// Check whether `to` has no commits that are missing from `from`
///
/// Uses the compare endpoint: an empty `from...to` range (no newest commit)
/// means every change on `to` is already part of `from`.
pub async fn is_branch_included(
    service: &dyn ProjectService,
    from: &str,
    to: &str,
) -> Result<bool> {
    require_branch("from_branch", from)?;
    require_branch("to_branch", to)?;

    let result = service.compare_branches(from, to).await?;
    Ok(result.is_included())
}
