//! GitLab project service implementation

use crate::config::ServiceConfig;
use crate::error::{Error, Result};
use crate::platform::ProjectService;
use crate::types::{CompareResult, MergeRequest, MergeRequestOutcome, MergeRequestPayload};
use async_trait::async_trait;
use reqwest::{Client, Request, StatusCode};
use tracing::debug;
use url::Url;

/// Header carrying the access token
const TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// GitLab service using reqwest
pub struct GitLabService {
    client: Client,
    config: ServiceConfig,
}

impl GitLabService {
    /// Create a new GitLab service
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Reject project URLs without a host before anything is sent
    ///
    /// Plain concatenation onto `http://` would otherwise turn the first
    /// path segment into the host name.
    fn check_base_url(&self) -> Result<()> {
        let url = Url::parse(&self.config.base_url)?;
        if url.host_str().is_none_or(str::is_empty) {
            return Err(url::ParseError::EmptyHost.into());
        }
        Ok(())
    }

    /// Build the merge request creation call without sending it
    pub fn merge_request_request(&self, payload: &MergeRequestPayload) -> Result<Request> {
        self.check_base_url()?;
        Ok(self
            .client
            .post(self.config.merge_requests_url())
            .header(TOKEN_HEADER, &self.config.access_token)
            .json(payload)
            .build()?)
    }

    /// Build the compare call without sending it
    pub fn compare_request(&self, from: &str, to: &str) -> Result<Request> {
        self.check_base_url()?;
        Ok(self
            .client
            .get(self.config.compare_url(from, to))
            .header(TOKEN_HEADER, &self.config.access_token)
            .build()?)
    }
}

#[async_trait]
impl ProjectService for GitLabService {
    async fn create_merge_request(
        &self,
        payload: &MergeRequestPayload,
    ) -> Result<MergeRequestOutcome> {
        let request = self.merge_request_request(payload)?;
        debug!(
            url = %request.url(),
            source = %payload.source_branch,
            target = %payload.target_branch,
            "creating MR"
        );

        let response = self.client.execute(request).await?;
        let status = response.status();
        debug!(status = status.as_u16(), "create MR response");

        if status.is_client_error() || status.is_server_error() {
            return Err(Error::Status {
                status: status.as_u16(),
            });
        }
        if status != StatusCode::CREATED {
            return Ok(MergeRequestOutcome::Unexpected(status.as_u16()));
        }

        // The body is informational only; 201 alone means created
        let body = response.text().await.unwrap_or_default();
        let mr: MergeRequest = serde_json::from_str(&body).unwrap_or_default();
        debug!(mr_iid = ?mr.iid, "created MR");
        Ok(MergeRequestOutcome::Created(mr))
    }

    async fn compare_branches(&self, from: &str, to: &str) -> Result<CompareResult> {
        let request = self.compare_request(from, to)?;
        debug!(url = %request.url(), from, to, "comparing branches");

        let response = self.client.execute(request).await?;
        let status = response.status();
        debug!(status = status.as_u16(), "compare response");

        if status != StatusCode::OK {
            return Err(Error::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let result: CompareResult = serde_json::from_str(&body)?;
        debug!(included = result.is_included(), "compared branches");
        Ok(result)
    }

    fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
