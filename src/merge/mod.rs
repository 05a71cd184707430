//! Merge request operations
//!
//! Both operations take the service as `&dyn ProjectService`, validate their
//! inputs, issue a single request and hand the outcome back to the caller.

mod create;
mod inclusion;

pub use create::submit_merge_request;
pub use inclusion::is_branch_included;

use crate::error::{Error, Result};

fn require_branch(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::InvalidArgument(format!("<{name}> must not be empty")));
    }
    Ok(())
}
