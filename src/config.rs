//! Service configuration from the environment
//!
//! Both values are read once at startup and passed explicitly to the
//! service. Tests build a config with [`ServiceConfig::from_lookup`] or
//! [`ServiceConfig::new`] instead of touching the process environment.

use std::env;
use std::fmt;

/// Environment variable holding the project API URL
pub const HOST_PROJECT_VAR: &str = "GITLAB_HOST_PROJECT";

/// Environment variable holding the private access token
pub const ACCESS_KEY_VAR: &str = "GITLAB_API_ACCESS_KEY";

/// Base URL used when [`HOST_PROJECT_VAR`] is unset
pub const DEFAULT_BASE_URL: &str = "http://";

/// Project endpoint and credentials for one CLI run
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Project API URL, e.g. `https://gitlab.example.com/api/v4/projects/123`
    pub base_url: String,
    /// Value sent in the `PRIVATE-TOKEN` header
    pub access_token: String,
}

impl ServiceConfig {
    /// Create a config from explicit values
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: access_token.into(),
        }
    }

    /// Read the config from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup
    ///
    /// Unset variables fall back to [`DEFAULT_BASE_URL`] and an empty token.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            base_url: lookup(HOST_PROJECT_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            access_token: lookup(ACCESS_KEY_VAR).unwrap_or_default(),
        }
    }

    /// URL of the project's merge requests collection
    pub fn merge_requests_url(&self) -> String {
        format!("{}/merge_requests", self.base_url)
    }

    /// URL of the compare endpoint for `from...to`, query values percent-encoded
    pub fn compare_url(&self, from: &str, to: &str) -> String {
        format!(
            "{}/repository/compare?from={}&to={}",
            self.base_url,
            urlencoding::encode(from),
            urlencoding::encode(to)
        )
    }
}

// Keep the token out of logs and panic messages
impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("base_url", &self.base_url)
            .field(
                "access_token",
                &if self.access_token.is_empty() { "" } else { "<redacted>" },
            )
            .finish()
    }
}
