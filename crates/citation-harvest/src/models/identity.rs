//! Paper identity: what the caller asks for and what the pipeline settles on.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static DOI_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:https?://(?:dx\.)?doi\.org/|doi:\s*)").expect("valid DOI prefix regex")
});

/// Strip resolver prefixes (`https://doi.org/`, `doi:`) and surrounding whitespace.
///
/// Returns `None` when nothing is left.
#[must_use]
pub fn normalize_doi(raw: &str) -> Option<String> {
    let mut doi = raw.trim();
    while let Some(prefix) = DOI_PREFIX.find(doi) {
        doi = doi[prefix.end()..].trim_start();
    }
    (!doi.is_empty()).then(|| doi.to_string())
}

/// A paper as described by the batch driver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperQuery {
    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,

    /// Paper DOI, bare or as a resolver URL.
    #[serde(default)]
    pub doi: Option<String>,
}

impl PaperQuery {
    /// Create a query from optional title and DOI.
    #[must_use]
    pub fn new(title: Option<String>, doi: Option<String>) -> Self {
        Self { title, doi }
    }

    /// Trimmed title, `None` if blank.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    /// Bare DOI, `None` if blank.
    #[must_use]
    pub fn doi(&self) -> Option<String> {
        self.doi.as_deref().and_then(normalize_doi)
    }

    /// True when neither a title nor a DOI is usable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title().is_none() && self.doi().is_none()
    }
}

/// The DOI the harvest runs against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedIdentity {
    /// Bare DOI.
    pub doi: String,

    /// Title of the search hit, when the DOI came from a title search.
    pub matched_title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_doi_prefixes() {
        assert_eq!(normalize_doi("https://doi.org/10.1/x").as_deref(), Some("10.1/x"));
        assert_eq!(normalize_doi("http://dx.doi.org/10.1/x").as_deref(), Some("10.1/x"));
        assert_eq!(normalize_doi("DOI: 10.1/x").as_deref(), Some("10.1/x"));
        assert_eq!(normalize_doi("  10.1/x  ").as_deref(), Some("10.1/x"));
    }

    #[test]
    fn test_normalize_doi_empty() {
        assert!(normalize_doi("").is_none());
        assert!(normalize_doi("https://doi.org/").is_none());
    }

    #[test]
    fn test_normalize_doi_repeated_prefix() {
        assert_eq!(
            normalize_doi("https://doi.org/https://doi.org/10.1/x").as_deref(),
            Some("10.1/x")
        );
    }

    #[test]
    fn test_query_blank_fields_are_absent() {
        let query = PaperQuery::new(Some("   ".into()), Some(String::new()));
        assert!(query.is_empty());
        assert!(PaperQuery::default().is_empty());
    }

    #[test]
    fn test_query_doi_is_bare() {
        let query = PaperQuery::new(None, Some("https://doi.org/10.1/example".into()));
        assert_eq!(query.doi().as_deref(), Some("10.1/example"));
        assert!(!query.is_empty());
    }
}
