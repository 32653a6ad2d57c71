//! Configuration for the citation harvester.

use std::time::Duration;

use anyhow::Context;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// OpenAlex API base URL.
    pub const OPENALEX_API: &str = "https://api.openalex.org";

    /// Semantic Scholar Graph API endpoint.
    pub const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// User agent sent to both services.
    pub const USER_AGENT: &str = concat!("citation-harvest/", env!("CARGO_PKG_VERSION"));

    /// Per-request timeout. A timed out request counts as a failed page.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Delay between citation-context pages (200ms = 5 req/s).
    pub const PAGE_DELAY: Duration = Duration::from_millis(200);

    /// Result window for the title search.
    pub const TITLE_SEARCH_WINDOW: u32 = 25;

    /// Page size for the OpenAlex citers collection.
    pub const CITERS_PAGE_SIZE: u32 = 200;

    /// Cursor value that starts an OpenAlex cursor walk.
    pub const INITIAL_CURSOR: &str = "*";

    /// Page size for the Semantic Scholar citations endpoint.
    pub const CONTEXT_PAGE_SIZE: usize = 100;

    /// Effective cap when the caller asks for no limit.
    pub const UNLIMITED_CONTEXT_CEILING: usize = 9999;

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Field projections for API requests.
pub mod fields {
    /// OpenAlex `select` for the title search.
    pub const TITLE_SEARCH: &[&str] = &["id", "doi", "title"];

    /// Minimal Semantic Scholar fields for the DOI lookup.
    pub const PAPER_ID: &[&str] = &["paperId", "title"];

    /// Citation edge projection with nested citing-paper metadata.
    pub const CITATION_CONTEXT: &[&str] = &[
        "contexts",
        "intents",
        "isInfluential",
        "citingPaper.title",
        "citingPaper.year",
        "citingPaper.venue",
        "citingPaper.externalIds",
        "citingPaper.paperId",
    ];
}

/// Harvester configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Semantic Scholar API key (optional).
    pub api_key: Option<String>,

    /// Base URL for OpenAlex (for testing with mock servers).
    pub openalex_api_url: String,

    /// Base URL for the Semantic Scholar Graph API (for testing with mock servers).
    pub graph_api_url: String,

    /// User agent header value.
    pub user_agent: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Minimum interval between citation-context page requests.
    pub page_delay: Duration,
}

impl Config {
    /// Create a configuration against the public endpoints.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            openalex_api_url: api::OPENALEX_API.to_string(),
            graph_api_url: api::GRAPH_API.to_string(),
            user_agent: api::USER_AGENT.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            page_delay: api::PAGE_DELAY,
        }
    }

    /// Create a test configuration with both services behind one mock server.
    ///
    /// OpenAlex is mounted under `/openalex`, Semantic Scholar under `/graph/v1`.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: None,
            openalex_api_url: format!("{}/openalex", base_url),
            graph_api_url: format!("{}/graph/v1", base_url),
            user_agent: api::USER_AGENT.to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            page_delay: Duration::from_millis(0), // No pacing in tests
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if a numeric variable does not parse.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::new(std::env::var("SEMANTIC_SCHOLAR_API_KEY").ok());

        if let Ok(url) = std::env::var("OPENALEX_API_URL") {
            config.openalex_api_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(url) = std::env::var("SEMANTIC_SCHOLAR_API_URL") {
            config.graph_api_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(agent) = std::env::var("HARVEST_USER_AGENT") {
            config.user_agent = agent;
        }
        if let Ok(ms) = std::env::var("HARVEST_PAGE_DELAY_MS") {
            let ms: u64 = ms.parse().context("HARVEST_PAGE_DELAY_MS must be an integer")?;
            config.page_delay = Duration::from_millis(ms);
        }
        if let Ok(secs) = std::env::var("HARVEST_REQUEST_TIMEOUT_SECS") {
            let secs: u64 =
                secs.parse().context("HARVEST_REQUEST_TIMEOUT_SECS must be an integer")?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.has_api_key());
        assert_eq!(config.page_delay, Duration::from_millis(200));
        assert_eq!(config.graph_api_url, api::GRAPH_API);
    }

    #[test]
    fn test_config_for_testing_disables_pacing() {
        let config = Config::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.page_delay, Duration::ZERO);
        assert_eq!(config.openalex_api_url, "http://127.0.0.1:9999/openalex");
        assert_eq!(config.graph_api_url, "http://127.0.0.1:9999/graph/v1");
    }

    #[test]
    fn test_fields() {
        assert_eq!(fields::CITATION_CONTEXT.len(), 8);
        assert!(fields::CITATION_CONTEXT.contains(&"citingPaper.externalIds"));
        assert_eq!(fields::PAPER_ID, &["paperId", "title"]);
    }
}
