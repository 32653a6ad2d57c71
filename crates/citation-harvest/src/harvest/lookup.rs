//! DOI to Semantic Scholar paper id.

use crate::client::SemanticScholarClient;
use crate::config::fields;

/// Look up the Semantic Scholar paper id for a bare DOI. No retries.
pub async fn lookup_paper_id(client: &SemanticScholarClient, doi: &str) -> Option<String> {
    match client.get_paper_by_doi(doi, fields::PAPER_ID).await {
        Ok(paper) => paper.id().map(str::to_string),
        Err(e) => {
            tracing::warn!(doi, error = %e, "Semantic Scholar DOI lookup failed");
            None
        }
    }
}
