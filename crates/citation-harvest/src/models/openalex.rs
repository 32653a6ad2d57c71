//! OpenAlex response shapes.

use serde::{Deserialize, Serialize};

/// A citing work as returned by OpenAlex, passed through untouched.
///
/// Key order is the order the service sent them in.
pub type CiterSummary = serde_json::Map<String, serde_json::Value>;

/// Work fields returned by the title search (`select=id,doi,title`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkSummary {
    /// DOI, usually as a `https://doi.org/` URL.
    #[serde(default)]
    pub doi: Option<String>,

    /// Work title.
    #[serde(default)]
    pub title: Option<String>,
}

/// Title search result page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkSearchResult {
    /// Works ranked by relevance.
    #[serde(default)]
    pub results: Vec<WorkSummary>,
}

impl WorkSearchResult {
    /// The first-ranked work, if any.
    #[must_use]
    pub fn best_match(&self) -> Option<&WorkSummary> {
        self.results.first()
    }
}

/// The part of a work record that links to its citers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkCitedBy {
    /// Ready-made list URL for works citing this one.
    #[serde(default)]
    pub cited_by_api_url: Option<String>,
}

impl WorkCitedBy {
    /// The citers link, ignoring blank values.
    #[must_use]
    pub fn citers_link(&self) -> Option<&str> {
        self.cited_by_api_url.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Cursor metadata on a list page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CursorMeta {
    /// Cursor for the next page (None = no more results).
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// One page of the citers collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CitersPage {
    /// Citing works on this page.
    #[serde(default)]
    pub results: Vec<CiterSummary>,

    /// Pagination metadata.
    #[serde(default)]
    pub meta: CursorMeta,
}

impl CitersPage {
    /// Cursor for the next page, ignoring blank values.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        self.meta.next_cursor.as_deref().filter(|c| !c.is_empty())
    }
}
