//! Offset-paginated citation-context walk over Semantic Scholar.

use crate::client::SemanticScholarClient;
use crate::config::{api, fields};
use crate::models::{CitationContext, Paged};
use crate::pacing::RequestGate;

/// Record cap for a caller limit; `limit <= 0` means no cap.
#[must_use]
pub fn effective_ceiling(limit: i32) -> usize {
    if limit <= 0 { api::UNLIMITED_CONTEXT_CEILING } else { limit as usize }
}

/// Fetch citation contexts for a Semantic Scholar paper.
///
/// Pages of [`api::CONTEXT_PAGE_SIZE`] are requested at increasing offsets.
/// The client's page delay spaces the *starts* of consecutive requests, not
/// the gap after each response: a page that takes longer than the delay to
/// arrive is followed by the next request at once.
///
/// The walk stops on an empty page, a failed page, or once the ceiling is
/// met; no page is requested past the ceiling. The overshoot of the last page
/// is dropped. Records keep their arrival order.
pub async fn fetch_contexts(
    client: &SemanticScholarClient,
    paper_id: &str,
    limit: i32,
) -> Paged<CitationContext> {
    let ceiling = effective_ceiling(limit);
    let gate = RequestGate::fixed_interval(client.page_delay());

    let mut rows: Vec<CitationContext> = Vec::new();
    let mut offset = 0;

    let mut paged = loop {
        if rows.len() >= ceiling {
            break Paged::capped(rows);
        }

        gate.ready().await;

        let page = match client
            .get_citations_page(paper_id, offset, api::CONTEXT_PAGE_SIZE, fields::CITATION_CONTEXT)
            .await
        {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(
                    paper_id,
                    offset,
                    collected = rows.len(),
                    error = %e,
                    "Semantic Scholar citations page failed"
                );
                break Paged::interrupted(rows, &e);
            }
        };

        if page.data.is_empty() {
            break Paged::exhausted(rows);
        }

        tracing::debug!(paper_id, offset, page_items = page.data.len(), "Citations page");

        rows.extend(page.data.into_iter().map(CitationContext::from));
        offset += api::CONTEXT_PAGE_SIZE;
    };

    paged.items.truncate(ceiling);
    paged
}
