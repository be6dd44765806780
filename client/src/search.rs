//! Search state carried in the page URL, and the rendered result view.

use common::{SearchParams, SearchResponse};
use reqwest::Url;

use crate::render;

pub fn params_from_url(url: &Url) -> SearchParams {
    let mut params = SearchParams::default();
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "q" => params.q = value.into_owned(),
            "location" => params.location = value.into_owned(),
            _ => {}
        }
    }
    params
}

/// The current URL with its query replaced by the search parameters.
pub fn with_params(url: &Url, params: &SearchParams) -> Url {
    let mut url = url.clone();
    url.query_pairs_mut()
        .clear()
        .append_pair("q", &params.q)
        .append_pair("location", &params.location);
    url
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Loaded { count: usize },
    Empty,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    pub params: SearchParams,
    pub status: SearchStatus,
    pub count_header: String,
    pub listing_html: String,
}

impl SearchView {
    pub fn from_response(params: SearchParams, response: &SearchResponse) -> Self {
        let status = if response.jobs.is_empty() {
            SearchStatus::Empty
        } else {
            SearchStatus::Loaded {
                count: response.jobs.len(),
            }
        };
        Self {
            params,
            status,
            count_header: render::count_header(response.count),
            listing_html: render::listing(&response.jobs),
        }
    }

    pub fn failed(params: SearchParams) -> Self {
        Self {
            params,
            status: SearchStatus::Failed,
            count_header: render::ERROR_HEADER.to_string(),
            listing_html: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_round_trip_through_url() {
        let base = Url::parse("http://localhost:3000/jobs/?page=2").unwrap();
        let params = SearchParams {
            q: "rust engineer".into(),
            location: "Pune".into(),
        };
        let url = with_params(&base, &params);
        assert_eq!(url.as_str(), "http://localhost:3000/jobs/?q=rust+engineer&location=Pune");
        assert_eq!(params_from_url(&url), params);
    }

    #[test]
    fn test_missing_params_default_to_empty() {
        let url = Url::parse("http://localhost:3000/jobs/").unwrap();
        assert_eq!(params_from_url(&url), SearchParams::default());
    }

    #[test]
    fn test_zero_results_view() {
        let response = SearchResponse {
            success: true,
            count: 0,
            jobs: vec![],
        };
        let view = SearchView::from_response(SearchParams::default(), &response);
        assert_eq!(view.status, SearchStatus::Empty);
        assert_eq!(view.count_header, "Available Jobs (0)");
        assert!(view.listing_html.contains("No jobs found"));
    }
}
