//! Harvest pipeline.
//!
//! Each step takes the client it needs and never returns an error: transport
//! failures end the step early and are recorded in the step's result.
//!
//! 1. [`resolve_doi`]: title to DOI (OpenAlex search)
//! 2. [`fetch_all_citers`]: DOI to citing works (OpenAlex cursor pages)
//! 3. [`lookup_paper_id`]: DOI to Semantic Scholar paper id
//! 4. [`fetch_contexts`]: paper id to citation contexts (offset pages)
//! 5. [`harvest`]: all of the above for one paper

mod citers;
mod contexts;
mod lookup;
mod pipeline;
mod resolver;

pub use citers::fetch_all_citers;
pub use contexts::{effective_ceiling, fetch_contexts};
pub use lookup::lookup_paper_id;
pub use pipeline::{THIRD_PARTY_NOTICE, harvest};
pub use resolver::{TitleMatch, resolve_doi};

use std::sync::Arc;

use crate::client::{OpenAlexClient, SemanticScholarClient};
use crate::config::Config;

/// Clients for one harvest.
#[derive(Debug, Clone)]
pub struct HarvestContext {
    /// OpenAlex client.
    pub openalex: Arc<OpenAlexClient>,

    /// Semantic Scholar client.
    pub semantic_scholar: Arc<SemanticScholarClient>,
}

impl HarvestContext {
    /// Create a harvest context from existing clients.
    #[must_use]
    pub fn new(openalex: Arc<OpenAlexClient>, semantic_scholar: Arc<SemanticScholarClient>) -> Self {
        Self { openalex, semantic_scholar }
    }

    /// Build both clients from one configuration.
    ///
    /// # Errors
    ///
    /// Returns error if either HTTP client fails to initialize.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(
            Arc::new(OpenAlexClient::new(config)?),
            Arc::new(SemanticScholarClient::new(config)?),
        ))
    }
}
