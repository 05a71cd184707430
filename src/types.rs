//! Core types for gitlab-mr

use serde::{Deserialize, Serialize};

/// Body of a `POST /merge_requests` call
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MergeRequestPayload {
    /// Project identifier; the configured project URL is sent as-is
    pub id: String,
    /// Branch being merged from
    pub source_branch: String,
    /// Branch being merged into
    pub target_branch: String,
    /// Merge request title
    pub title: String,
    /// Assignee user ID, serialized as `null` when absent
    pub assignee_id: Option<String>,
    /// Delete the source branch once merged
    pub remove_source_branch: bool,
}

impl MergeRequestPayload {
    /// Build the payload for merging `source` into `target`
    pub fn new(project: &str, source: &str, target: &str, assignee: Option<&str>) -> Self {
        Self {
            id: project.to_string(),
            source_branch: source.to_string(),
            target_branch: target.to_string(),
            title: merge_request_title(source, target),
            assignee_id: assignee.map(ToString::to_string),
            remove_source_branch: true,
        }
    }
}

/// Title used for every created merge request
pub fn merge_request_title(source: &str, target: &str) -> String {
    format!("Merge {source} to {target}")
}

/// Fields of a created merge request that the CLI reports
///
/// Parsed leniently: servers that answer 201 with an empty or partial body
/// still count as success.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct MergeRequest {
    /// Project-scoped merge request number
    #[serde(default)]
    pub iid: Option<u64>,
    /// Browser URL of the merge request
    #[serde(default)]
    pub web_url: Option<String>,
}

/// Result of a merge request creation attempt that reached the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeRequestOutcome {
    /// Server answered 201 Created
    Created(MergeRequest),
    /// Server answered with a non-error status other than 201
    Unexpected(u16),
}

impl MergeRequestOutcome {
    /// Numeric result: 0 when created, the status code otherwise
    pub const fn code(&self) -> u16 {
        match self {
            Self::Created(_) => 0,
            Self::Unexpected(status) => *status,
        }
    }

    /// Whether the merge request was created
    pub const fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Response of `GET /repository/compare`
///
/// Only `commit` matters: it is the newest commit of the compared range and
/// `null` when the range is empty.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CompareResult {
    /// Newest commit in `from..to`, if any
    #[serde(default)]
    pub commit: Option<serde_json::Value>,
}

impl CompareResult {
    /// `to` has no commits missing from `from`
    pub const fn is_included(&self) -> bool {
        self.commit.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_serializes_null_assignee() {
        let payload = MergeRequestPayload::new("https://gl.test/p/9", "feature/x", "main", None);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "https://gl.test/p/9",
                "source_branch": "feature/x",
                "target_branch": "main",
                "title": "Merge feature/x to main",
                "assignee_id": null,
                "remove_source_branch": true,
            })
        );
    }

    #[test]
    fn test_payload_keeps_assignee() {
        let payload = MergeRequestPayload::new("p", "a", "b", Some("42"));
        assert_eq!(payload.assignee_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_compare_result_null_commit_is_included() {
        let result: CompareResult =
            serde_json::from_str(r#"{"commit": null, "commits": []}"#).unwrap();
        assert!(result.is_included());
    }

    #[test]
    fn test_compare_result_missing_commit_is_included() {
        let result: CompareResult = serde_json::from_str(r#"{"diffs": []}"#).unwrap();
        assert!(result.is_included());
    }

    #[test]
    fn test_compare_result_with_commit_is_not_included() {
        let result: CompareResult =
            serde_json::from_str(r#"{"commit": {"id": "abc123", "title": "wip"}}"#).unwrap();
        assert!(!result.is_included());
    }

    #[test]
    fn test_outcome_codes() {
        assert_eq!(MergeRequestOutcome::Created(MergeRequest::default()).code(), 0);
        assert_eq!(MergeRequestOutcome::Unexpected(200).code(), 200);
        assert!(!MergeRequestOutcome::Unexpected(202).is_created());
    }
}
