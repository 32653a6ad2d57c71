//! OpenAlex works API client.

use reqwest::header::HeaderMap;
use url::Url;

use super::HttpCore;
use crate::config::{Config, api, fields};
use crate::error::ClientResult;
use crate::models::{CitersPage, WorkCitedBy, WorkSearchResult};

/// OpenAlex API client.
#[derive(Clone)]
pub struct OpenAlexClient {
    http: HttpCore,

    /// OpenAlex base URL.
    api_url: String,
}

impl OpenAlexClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            http: HttpCore::new(config, HeaderMap::new())?,
            api_url: config.openalex_api_url.clone(),
        })
    }

    /// Relevance-ranked title search.
    pub async fn search_works(&self, title: &str) -> ClientResult<WorkSearchResult> {
        let url = format!("{}/works", self.api_url);

        let params = [
            ("search", title.to_string()),
            ("per_page", api::TITLE_SEARCH_WINDOW.to_string()),
            ("select", fields::TITLE_SEARCH.join(",")),
        ];

        self.http.get(url, &params).await
    }

    /// Look up a work by bare DOI.
    pub async fn get_work_by_doi(&self, doi: &str) -> ClientResult<WorkCitedBy> {
        let url = format!("{}/works/https://doi.org/{}", self.api_url, doi);

        self.http.get(url, &[]).await
    }

    /// Fetch one page of a citers collection.
    ///
    /// `cited_by` is the work's `cited_by_api_url`; its own query (the `cites:`
    /// filter) is kept and the paging parameters are appended.
    pub async fn get_citers_page(&self, cited_by: &Url, cursor: &str) -> ClientResult<CitersPage> {
        let params = [
            ("per_page", api::CITERS_PAGE_SIZE.to_string()),
            ("cursor", cursor.to_string()),
        ];

        self.http.get(cited_by.clone(), &params).await
    }
}

impl std::fmt::Debug for OpenAlexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAlexClient").field("api_url", &self.api_url).finish()
    }
}
