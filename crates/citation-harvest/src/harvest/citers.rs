//! Cursor-paginated citer walk over OpenAlex.

use url::Url;

use crate::client::OpenAlexClient;
use crate::config::api;
use crate::error::ClientError;
use crate::models::{CiterSummary, Paged};

/// Fetch every OpenAlex work citing `doi`.
///
/// Unbounded: the walk follows `meta.next_cursor` until it runs out. A work
/// without a `cited_by_api_url` has no citers. A failed page ends the walk
/// and keeps what was already collected.
pub async fn fetch_all_citers(client: &OpenAlexClient, doi: &str) -> Paged<CiterSummary> {
    let work = match client.get_work_by_doi(doi).await {
        Ok(work) => work,
        Err(e) => {
            tracing::warn!(doi, error = %e, "OpenAlex work lookup failed");
            return Paged::interrupted(Vec::new(), &e);
        }
    };

    let Some(link) = work.citers_link() else {
        tracing::debug!(doi, "OpenAlex work has no citers link");
        return Paged::exhausted(Vec::new());
    };

    let cited_by = match Url::parse(link) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!(doi, link, error = %e, "OpenAlex citers link is not a URL");
            return Paged::interrupted(Vec::new(), &ClientError::from(e));
        }
    };

    let mut rows = Vec::new();
    let mut cursor = api::INITIAL_CURSOR.to_string();

    loop {
        let page = match client.get_citers_page(&cited_by, &cursor).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(doi, collected = rows.len(), error = %e, "OpenAlex citers page failed");
                return Paged::interrupted(rows, &e);
            }
        };

        tracing::debug!(doi, page_items = page.results.len(), "OpenAlex citers page");

        let next = page.next_cursor().map(str::to_string);
        rows.extend(page.results);

        match next {
            Some(next) => cursor = next,
            None => break,
        }
    }

    Paged::exhausted(rows)
}
