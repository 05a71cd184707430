//! Mock project service for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use gitlab_mr::error::{Error, Result};
use gitlab_mr::platform::ProjectService;
use gitlab_mr::types::{CompareResult, MergeRequest, MergeRequestOutcome, MergeRequestPayload};
use gitlab_mr::ServiceConfig;
use std::sync::Mutex;

/// Call record for `compare_branches`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareCall {
    pub from: String,
    pub to: String,
}

/// Config pointing at a fake project
pub fn test_config() -> ServiceConfig {
    ServiceConfig::new("https://gl.test/api/v4/projects/9", "tok123")
}

/// Simple mock project service for testing
///
/// Features:
/// - Configurable status for merge request creation
/// - Configurable compare response
/// - Call tracking for verification
/// - Status error injection for failure path testing
pub struct MockProjectService {
    config: ServiceConfig,
    create_status: Mutex<u16>,
    compare_response: Mutex<CompareResult>,
    // Call tracking
    create_calls: Mutex<Vec<MergeRequestPayload>>,
    compare_calls: Mutex<Vec<CompareCall>>,
    // Error injection
    error_status: Mutex<Option<u16>>,
}

impl MockProjectService {
    /// Create a new mock with the given config
    pub fn with_config(config: ServiceConfig) -> Self {
        Self {
            config,
            create_status: Mutex::new(201),
            compare_response: Mutex::new(CompareResult::default()),
            create_calls: Mutex::new(Vec::new()),
            compare_calls: Mutex::new(Vec::new()),
            error_status: Mutex::new(None),
        }
    }

    /// Create a new mock with [`test_config`]
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    // === Response configuration ===

    /// Status the server answers merge request creation with
    pub fn set_create_status(&self, status: u16) {
        *self.create_status.lock().unwrap() = status;
    }

    /// Make the compare range contain a commit
    pub fn set_compare_commit(&self, commit: serde_json::Value) {
        *self.compare_response.lock().unwrap() = CompareResult {
            commit: Some(commit),
        };
    }

    /// Make every call fail with an HTTP error status
    pub fn fail_with_status(&self, status: u16) {
        *self.error_status.lock().unwrap() = Some(status);
    }

    // === Call inspection ===

    /// Payloads passed to `create_merge_request`
    pub fn get_create_calls(&self) -> Vec<MergeRequestPayload> {
        self.create_calls.lock().unwrap().clone()
    }

    /// Branch pairs passed to `compare_branches`
    pub fn get_compare_calls(&self) -> Vec<CompareCall> {
        self.compare_calls.lock().unwrap().clone()
    }

    /// Total number of requests made
    pub fn request_count(&self) -> usize {
        self.create_calls.lock().unwrap().len() + self.compare_calls.lock().unwrap().len()
    }

    fn injected_error(&self) -> Result<()> {
        match *self.error_status.lock().unwrap() {
            Some(status) => Err(Error::Status { status }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ProjectService for MockProjectService {
    async fn create_merge_request(
        &self,
        payload: &MergeRequestPayload,
    ) -> Result<MergeRequestOutcome> {
        self.create_calls.lock().unwrap().push(payload.clone());
        self.injected_error()?;

        let status = *self.create_status.lock().unwrap();
        if status == 201 {
            Ok(MergeRequestOutcome::Created(MergeRequest {
                iid: Some(1),
                web_url: Some(format!("{}/-/merge_requests/1", self.config.base_url)),
            }))
        } else {
            Ok(MergeRequestOutcome::Unexpected(status))
        }
    }

    async fn compare_branches(&self, from: &str, to: &str) -> Result<CompareResult> {
        self.compare_calls.lock().unwrap().push(CompareCall {
            from: from.to_string(),
            to: to.to_string(),
        });
        self.injected_error()?;
        Ok(self.compare_response.lock().unwrap().clone())
    }

    fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
