use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};

use crate::github::error::ApiError;
use crate::types::{SearchQuery, SearchResult};

use tracing::{debug, warn};

/// Endpoint of the GitHub issue search API
pub const ISSUES_SEARCH_URL: &str = "https://api.github.com/search/issues";

/// Default timeout applied to the search request when none is given
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking client for the GitHub issue search API.
///
/// Holds a preconfigured HTTP client with the headers the API expects.
/// The client is synchronous: a search call either completes or fails,
/// and only one connection is open at a time.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl GitHubClient {
    /// Client against the public GitHub search endpoint
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        Self::with_endpoint(ISSUES_SEARCH_URL, timeout)
    }

    /// Client against a non-default search endpoint, for GitHub
    /// Enterprise hosts
    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("issue-insight"));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
        let connect_timeout = std::cmp::min(timeout, Duration::from_secs(10));

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Searches issues matching the query.
    ///
    /// Performs a single GET against the search endpoint and decodes the
    /// JSON body into a [`SearchResult`]. Only the API's first result page
    /// is fetched. The response body is released on every path out of this
    /// function: each early return drops the response handle, which closes
    /// the connection.
    pub fn search_issues(&self, query: &SearchQuery) -> Result<SearchResult, ApiError> {
        let url = format!("{}?q={}", self.endpoint, query.encoded());
        debug!("GET {}", url);

        let response = self.client.get(&url).send().map_err(ApiError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            // The body is dropped undecoded along with the response.
            warn!("search query failed: {}", status);
            return Err(ApiError::Request { status });
        }

        let body = response.text().map_err(ApiError::Transport)?;
        let result: SearchResult = serde_json::from_str(&body).map_err(ApiError::Decode)?;

        debug!(
            "decoded {} of {} matching issues",
            result.items.len(),
            result.total_count
        );
        Ok(result)
    }
}
