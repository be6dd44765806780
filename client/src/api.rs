//! HTTP calls against the job board backend.

use common::{apply_form, paths, ActionResponse, SearchParams, SearchResponse};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode, Url};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ActionError;
use crate::page::PageSnapshot;
use crate::ports::ApplicationSubmission;

pub struct JobsApi {
    http: Client,
    base_url: Url,
}

impl JobsApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ActionError> {
        if config.base_url.cannot_be_a_base() {
            return Err(ActionError::Malformed(format!(
                "base URL {} cannot carry a path",
                config.base_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert("X-Requested-With", HeaderValue::from_static("XMLHttpRequest"));

        let mut builder = Client::builder().default_headers(headers).cookie_store(true);
        if let Some(timeout) = config.http_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    /// Fetches and scans a rendered page.
    pub async fn page(&self, url: Url) -> Result<PageSnapshot, ActionError> {
        debug!("GET {url}");
        let response = self.http.get(url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(ActionError::Status(response.status()));
        }
        let html = response.text().await?;
        Ok(PageSnapshot::parse(url, &html))
    }

    pub async fn save(&self, job_id: &str) -> Result<ActionResponse, ActionError> {
        self.post_action(job_id, paths::SAVE_SEGMENT).await
    }

    pub async fn unsave(&self, job_id: &str) -> Result<ActionResponse, ActionError> {
        self.post_action(job_id, paths::UNSAVE_SEGMENT).await
    }

    pub async fn apply(
        &self,
        job_id: &str,
        submission: &ApplicationSubmission,
    ) -> Result<ActionResponse, ActionError> {
        let mut form = Form::new()
            .text(apply_form::NAME, submission.name.trim().to_string())
            .text(apply_form::EMAIL, submission.email.trim().to_string());
        if let Some(phone) = non_blank(&submission.phone) {
            form = form.text(apply_form::PHONE, phone);
        }
        if let Some(cover) = non_blank(&submission.cover_letter) {
            form = form.text(apply_form::COVER_LETTER, cover);
        }
        if let Some(resume) = &submission.resume {
            let part = Part::bytes(resume.bytes.clone())
                .file_name(resume.file_name.clone())
                .mime_str(&resume.content_type)?;
            form = form.part(apply_form::RESUME, part);
        }

        let url = self.job_url(job_id, paths::APPLY_SEGMENT)?;
        debug!("POST {url} (multipart)");
        let response = self.http.post(url).multipart(form).send().await?;
        read_action(response).await
    }

    pub async fn search(&self, params: &SearchParams) -> Result<SearchResponse, ActionError> {
        let url = self.endpoint(paths::SEARCH.trim_start_matches('/').split('/'))?;
        debug!("GET {url}?q={}&location={}", params.q, params.location);

        let response = self.http.get(url).query(params).send().await?;
        if !response.status().is_success() {
            return Err(ActionError::Status(response.status()));
        }
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ActionError::Malformed(e.to_string()))
    }

    async fn post_action(&self, job_id: &str, action: &str) -> Result<ActionResponse, ActionError> {
        let url = self.job_url(job_id, action)?;
        debug!("POST {url}");
        let response = self.http.post(url).send().await?;
        read_action(response).await
    }

    /// `/jobs/{id}/{action}` with the id as a single encoded segment.
    fn job_url(&self, job_id: &str, action: &str) -> Result<Url, ActionError> {
        self.endpoint([paths::JOBS_SEGMENT, job_id, action])
    }

    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url, ActionError> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|_| ActionError::Malformed(format!("base URL {} cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// A decodable `success: false` body is a rejection whatever the status;
/// anything else off the happy path is a transport failure.
async fn read_action(response: Response) -> Result<ActionResponse, ActionError> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(ActionError::NotAuthenticated);
    }

    let body = response.bytes().await?;
    match serde_json::from_slice::<ActionResponse>(&body) {
        Ok(parsed) if !parsed.success => Err(ActionError::Rejected {
            message: parsed.message.filter(|m| !m.trim().is_empty()),
        }),
        Ok(parsed) if status.is_success() => Ok(parsed),
        Ok(_) => Err(ActionError::Status(status)),
        Err(e) if status.is_success() => Err(ActionError::Malformed(e.to_string())),
        Err(_) => Err(ActionError::Status(status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> JobsApi {
        JobsApi::new(&ClientConfig::for_base_url(Url::parse(base).unwrap())).unwrap()
    }

    #[test]
    fn test_job_url_encodes_id_segment() {
        let api = api("http://localhost:3000");
        let url = api.job_url("a/b c", paths::SAVE_SEGMENT).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/jobs/a%2Fb%20c/save");
    }

    #[test]
    fn test_job_url_keeps_base_prefix() {
        let api = api("http://localhost:3000/board/");
        let url = api.job_url("42", paths::APPLY_SEGMENT).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/board/jobs/42/apply");
    }

    #[test]
    fn test_search_url_under_prefix() {
        let api = api("http://localhost:3000/board/?stale=1");
        let url = api.endpoint(paths::SEARCH.trim_start_matches('/').split('/')).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/board/jobs/api/search");
    }

    #[test]
    fn test_non_blank_drops_whitespace() {
        assert_eq!(non_blank(&Some("  ".into())), None);
        assert_eq!(non_blank(&Some(" 555 ".into())), Some("555".to_string()));
        assert_eq!(non_blank(&None), None);
    }
}
