//! Title to DOI resolution.

use crate::client::OpenAlexClient;
use crate::models::normalize_doi;

/// Best-effort title search hit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleMatch {
    /// Bare DOI of the first-ranked work.
    pub doi: Option<String>,

    /// Title of the first-ranked work.
    pub matched_title: Option<String>,
}

/// Resolve a DOI from a title via OpenAlex search.
///
/// Takes the first-ranked result without any scoring. A wrong match is
/// accepted: downstream steps find no citations for it rather than failing.
/// Blank titles, failed requests and empty result sets all give an empty match.
pub async fn resolve_doi(client: &OpenAlexClient, title: &str) -> TitleMatch {
    let title = title.trim();
    if title.is_empty() {
        return TitleMatch::default();
    }

    let result = match client.search_works(title).await {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(error = %e, "OpenAlex title search failed");
            return TitleMatch::default();
        }
    };

    let Some(best) = result.best_match() else {
        tracing::info!(title, "OpenAlex title search returned no works");
        return TitleMatch::default();
    };

    let doi = best.doi.as_deref().and_then(normalize_doi);
    let matched_title = best.title.clone();

    // No confidence threshold is applied; surface mismatches for review.
    if let Some(found) = matched_title.as_deref() {
        if !found.trim().eq_ignore_ascii_case(title) {
            tracing::warn!(query = title, matched = found, "Title search matched a different title");
        }
    }

    TitleMatch { doi, matched_title }
}
