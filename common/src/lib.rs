//! Wire contract shared by the job board client and the backend.
//!
//! Both sides agree on the JSON bodies, the endpoint paths and the `data-*`
//! attributes that server-rendered pages carry for interactive controls.

use serde::{Deserialize, Serialize};

/// Read-only projection of a job posting, as returned by the search API.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct JobSearchResult {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub remote: bool,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub description: String,
    /// Free-form salary text; empty when the posting has none.
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub posted_date: String,
}

/// Body returned by the save, unsave and apply endpoints.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

/// Body returned by `GET /jobs/api/search`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub jobs: Vec<JobSearchResult>,
}

/// Query string of the search endpoint and of the listing page URL.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub location: String,
}

/// Endpoint paths.
pub mod paths {
    pub const LISTING: &str = "/jobs/";
    pub const SEARCH: &str = "/jobs/api/search";
    pub const LOGIN: &str = "/auth/login";

    /// Leading segment shared by every per-job route.
    pub const JOBS_SEGMENT: &str = "jobs";
    pub const SAVE_SEGMENT: &str = "save";
    pub const UNSAVE_SEGMENT: &str = "unsave";
    pub const APPLY_SEGMENT: &str = "apply";

    use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

    /// Bytes encoded when a job id is placed in one path segment.
    const SEGMENT: &AsciiSet = &CONTROLS
        .add(b' ')
        .add(b'"')
        .add(b'#')
        .add(b'%')
        .add(b'&')
        .add(b'\'')
        .add(b'/')
        .add(b'<')
        .add(b'>')
        .add(b'?')
        .add(b'`')
        .add(b'{')
        .add(b'}');

    /// Detail page link for a job. The id is one encoded segment, so the
    /// link is safe inside a quoted attribute as is.
    pub fn detail(job_id: &str) -> String {
        format!("/jobs/{}", utf8_percent_encode(job_id, SEGMENT))
    }
}

/// Markup contract for interactive controls on rendered pages.
pub mod markup {
    pub const AUTHENTICATED_ATTR: &str = "data-user-authenticated";
    pub const PAGE_ATTR: &str = "data-page";
    pub const JOB_ID_ATTR: &str = "data-job-id";
    pub const SAVED_ATTR: &str = "data-saved";
    pub const APPLIED_ATTR: &str = "data-applied";

    pub const SAVE_CLASS: &str = "save-job-btn";
    pub const APPLY_CLASS: &str = "apply-job-btn";
    /// Apply class used by older listing templates.
    pub const QUICK_APPLY_CLASS: &str = "quick-apply-btn";
    pub const SHARE_CLASS: &str = "share-job-btn";
    pub const DETAIL_CONTAINER_CLASS: &str = "job-detail";

    pub const DETAIL_PAGE: &str = "detail";

    /// Escapes text for use in element content and quoted attributes.
    pub fn escape(raw: &str) -> String {
        v_htmlescape::escape(raw).to_string()
    }
}

/// Multipart field names of the apply form.
pub mod apply_form {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const COVER_LETTER: &str = "cover_letter";
    pub const RESUME: &str = "resume";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_tolerates_missing_optional_fields() {
        let job: JobSearchResult =
            serde_json::from_str(r#"{"id":"7","title":"Rust Dev","company":"Acme"}"#).unwrap();
        assert_eq!(job.id, "7");
        assert!(!job.remote);
        assert!(job.salary.is_empty());
    }

    #[test]
    fn test_action_response_without_message() {
        let resp: ActionResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(resp.success);
        assert_eq!(resp.message, None);
    }

    #[test]
    fn test_search_response_defaults_jobs() {
        let resp: SearchResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(resp.count, 0);
        assert!(resp.jobs.is_empty());
    }

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            markup::escape(r#"Tom & "Jerry" <3"#),
            "Tom &amp; &quot;Jerry&quot; &lt;3"
        );
    }

    #[test]
    fn test_detail_path() {
        assert_eq!(paths::detail("mock_3"), "/jobs/mock_3");
        assert_eq!(paths::detail("a/b?c#d e"), "/jobs/a%2Fb%3Fc%23d%20e");
    }
}
