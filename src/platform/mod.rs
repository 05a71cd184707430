//! Project services for the GitLab API
//!
//! Provides the interface the merge operations are written against.

mod gitlab;

pub use gitlab::GitLabService;

use crate::config::ServiceConfig;
use crate::error::Result;
use crate::types::{CompareResult, MergeRequestOutcome, MergeRequestPayload};
use async_trait::async_trait;

/// Project service trait for merge request and compare operations
///
/// Each method issues exactly one request. Nothing is retried.
#[async_trait]
pub trait ProjectService: Send + Sync {
    /// Create a merge request from a prepared payload
    ///
    /// Returns `Ok` for any non-error status the server answers with;
    /// 4xx/5xx answers come back as [`Error::Status`](crate::Error::Status).
    async fn create_merge_request(
        &self,
        payload: &MergeRequestPayload,
    ) -> Result<MergeRequestOutcome>;

    /// Compare two branches (`from...to`)
    ///
    /// Any status other than 200 is an [`Error::Status`](crate::Error::Status).
    async fn compare_branches(&self, from: &str, to: &str) -> Result<CompareResult>;

    /// Get the service configuration
    fn config(&self) -> &ServiceConfig;
}

/// Create the project service for a configuration
pub fn create_project_service(config: ServiceConfig) -> Result<Box<dyn ProjectService>> {
    Ok(Box::new(GitLabService::new(config)?))
}
