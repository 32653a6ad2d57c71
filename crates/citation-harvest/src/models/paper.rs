//! Semantic Scholar shapes and the normalized citation-context record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Minimal paper record from the by-DOI lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperLookup {
    /// Semantic Scholar paper ID.
    #[serde(default)]
    pub paper_id: Option<String>,
}

impl PaperLookup {
    /// The paper id, ignoring blank values.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.paper_id.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// External identifiers for a paper. Only the DOI is kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalIds {
    /// Digital Object Identifier.
    #[serde(rename = "DOI", default, deserialize_with = "lenient")]
    pub doi: Option<String>,
}

/// Citing-paper metadata nested in a citation edge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitingPaper {
    /// Paper ID.
    #[serde(default, deserialize_with = "lenient")]
    pub paper_id: Option<String>,

    /// Paper title.
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,

    /// Publication year.
    #[serde(default, deserialize_with = "lenient")]
    pub year: Option<i32>,

    /// Publication venue.
    #[serde(default, deserialize_with = "lenient")]
    pub venue: Option<String>,

    /// External identifiers.
    #[serde(default, deserialize_with = "lenient")]
    pub external_ids: Option<ExternalIds>,
}

/// One citation edge as returned by `/paper/{id}/citations`.
///
/// Every field is optional and a value of the wrong type reads as absent, so
/// one odd record never fails the page it arrived on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationEdge {
    /// The citing paper.
    #[serde(default, deserialize_with = "lenient")]
    pub citing_paper: Option<CitingPaper>,

    /// Text snippets around the citation.
    #[serde(default, deserialize_with = "lenient")]
    pub contexts: Option<Vec<String>>,

    /// Intent classes (e.g. "methodology", "background").
    #[serde(default, deserialize_with = "lenient")]
    pub intents: Option<Vec<String>>,

    /// Whether this is an influential citation.
    #[serde(default, deserialize_with = "lenient")]
    pub is_influential: Option<bool>,
}

/// One page of citation edges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CitationPage {
    /// Citation edges. `null` is read as an empty page; non-object entries
    /// read as empty edges.
    #[serde(default, deserialize_with = "edges")]
    pub data: Vec<CitationEdge>,
}

/// Read any JSON value, keeping it only if it has the expected shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn edges<'de, D>(deserializer: D) -> Result<Vec<CitationEdge>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let items = lenient::<_, Vec<Value>>(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect())
}

/// Normalized citation record: one per citing paper and citation edge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationContext {
    /// Citing paper ID.
    pub paper_id: Option<String>,

    /// Citing paper title.
    pub title: Option<String>,

    /// Citing paper year.
    pub year: Option<i32>,

    /// Citing paper venue.
    pub venue: Option<String>,

    /// Citing paper DOI.
    pub doi: Option<String>,

    /// Citation intents.
    pub intents: Vec<String>,

    /// Citation context snippets.
    pub contexts: Vec<String>,

    /// Influence flag.
    pub is_influential: Option<bool>,
}

impl From<CitationEdge> for CitationContext {
    fn from(edge: CitationEdge) -> Self {
        let paper = edge.citing_paper.unwrap_or_default();
        let doi = paper.external_ids.and_then(|ids| ids.doi);

        Self {
            paper_id: paper.paper_id,
            title: paper.title,
            year: paper.year,
            venue: paper.venue,
            doi,
            intents: edge.intents.unwrap_or_default(),
            contexts: edge.contexts.unwrap_or_default(),
            is_influential: edge.is_influential,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_full_edge() {
        let json = r#"{
            "contexts": ["as shown in [3]"],
            "intents": ["methodology"],
            "isInfluential": true,
            "citingPaper": {
                "paperId": "c1",
                "title": "Citing Work",
                "year": 2022,
                "venue": "ACL",
                "externalIds": {"DOI": "10.5/cite", "CorpusId": 42}
            }
        }"#;
        let edge: CitationEdge = serde_json::from_str(json).unwrap();
        let ctx = CitationContext::from(edge);

        assert_eq!(ctx.paper_id.as_deref(), Some("c1"));
        assert_eq!(ctx.doi.as_deref(), Some("10.5/cite"));
        assert_eq!(ctx.year, Some(2022));
        assert_eq!(ctx.intents, vec!["methodology"]);
        assert_eq!(ctx.is_influential, Some(true));
    }

    #[test]
    fn test_flatten_missing_everything() {
        let edge: CitationEdge = serde_json::from_str("{}").unwrap();
        let ctx = CitationContext::from(edge);
        assert_eq!(ctx, CitationContext::default());
    }

    #[test]
    fn test_flatten_nulls() {
        let json = r#"{"contexts": null, "intents": null, "isInfluential": null,
                       "citingPaper": {"paperId": null, "externalIds": null}}"#;
        let ctx = CitationContext::from(serde_json::from_str::<CitationEdge>(json).unwrap());
        assert!(ctx.contexts.is_empty());
        assert!(ctx.intents.is_empty());
        assert!(ctx.doi.is_none());
    }

    #[test]
    fn test_serialized_keys_are_camel_case() {
        let value = serde_json::to_value(CitationContext::default()).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["paperId", "title", "year", "venue", "doi", "intents", "contexts", "isInfluential"]
        );
    }

    #[test]
    fn test_null_data_is_empty_page() {
        let page: CitationPage = serde_json::from_str(r#"{"offset": 0, "data": null}"#).unwrap();
        assert!(page.data.is_empty());
    }

    #[test]
    fn test_mistyped_fields_read_as_absent() {
        let json = r#"{
            "contexts": "not a list",
            "intents": ["background", 3],
            "isInfluential": "yes",
            "citingPaper": {
                "paperId": "c2",
                "title": "Still Here",
                "year": "2021",
                "externalIds": {"DOI": "10.5/ok", "CorpusId": "123"}
            }
        }"#;
        let ctx = CitationContext::from(serde_json::from_str::<CitationEdge>(json).unwrap());

        assert_eq!(ctx.paper_id.as_deref(), Some("c2"));
        assert_eq!(ctx.title.as_deref(), Some("Still Here"));
        assert_eq!(ctx.doi.as_deref(), Some("10.5/ok"));
        assert!(ctx.year.is_none());
        assert!(ctx.contexts.is_empty());
        assert!(ctx.intents.is_empty());
        assert!(ctx.is_influential.is_none());
    }

    #[test]
    fn test_page_keeps_neighbours_of_odd_entries() {
        let json = r#"{"offset": "zero", "next": "100", "data": [
            {"citingPaper": {"paperId": "a"}},
            42,
            {"citingPaper": {"paperId": "b", "externalIds": ["not", "a", "map"]}}
        ]}"#;
        let page: CitationPage = serde_json::from_str(json).unwrap();
        let ids: Vec<Option<String>> =
            page.data.into_iter().map(|e| CitationContext::from(e).paper_id).collect();
        assert_eq!(ids, [Some("a".to_string()), None, Some("b".to_string())]);
    }

    #[test]
    fn test_lookup_blank_id() {
        let lookup: PaperLookup = serde_json::from_str(r#"{"paperId": ""}"#).unwrap();
        assert!(lookup.id().is_none());
    }
}
