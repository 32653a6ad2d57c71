//! Semantic Scholar Graph API client.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};

use super::HttpCore;
use crate::config::Config;
use crate::error::ClientResult;
use crate::models::{CitationPage, PaperLookup};

/// Semantic Scholar API client.
#[derive(Clone)]
pub struct SemanticScholarClient {
    http: HttpCore,

    /// API key (optional).
    api_key: Option<String>,

    /// Graph API base URL.
    graph_api_url: String,

    /// Minimum interval between citation pages.
    page_delay: Duration,
}

impl SemanticScholarClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails or the API key is not
    /// a valid header value.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(ref key) = config.api_key {
            headers.insert("x-api-key", HeaderValue::from_str(key)?);
        }

        Ok(Self {
            http: HttpCore::new(config, headers)?,
            api_key: config.api_key.clone(),
            graph_api_url: config.graph_api_url.clone(),
            page_delay: config.page_delay,
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Minimum interval between citation pages.
    #[must_use]
    pub const fn page_delay(&self) -> Duration {
        self.page_delay
    }

    /// Look up a paper by bare DOI.
    pub async fn get_paper_by_doi(&self, doi: &str, fields: &[&str]) -> ClientResult<PaperLookup> {
        let url = format!("{}/paper/DOI:{}", self.graph_api_url, doi);
        let params = [("fields", fields.join(","))];

        self.http.get(url, &params).await
    }

    /// Fetch one page of citation edges.
    pub async fn get_citations_page(
        &self,
        paper_id: &str,
        offset: usize,
        limit: usize,
        fields: &[&str],
    ) -> ClientResult<CitationPage> {
        let url = format!("{}/paper/{}/citations", self.graph_api_url, paper_id);

        let params = [
            ("fields", fields.join(",")),
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ];

        self.http.get(url, &params).await
    }
}

impl std::fmt::Debug for SemanticScholarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticScholarClient").field("has_api_key", &self.has_api_key()).finish()
    }
}
