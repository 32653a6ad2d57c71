//! Harvest artifacts on disk.
//!
//! Layout under the output root:
//!
//! ```text
//! <root>/<slug(doi)>/openalex_citing_all.csv   citer archive (only if non-empty)
//! <root>/<slug(doi)>/citing_contexts.json      citation contexts, arrival order
//! ```

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::OutputError;
use crate::models::{CitationContext, CiterSummary};

/// Citer archive file name.
pub const CITERS_FILE: &str = "openalex_citing_all.csv";

/// Citation-context document file name.
pub const CONTEXTS_FILE: &str = "citing_contexts.json";

/// Maximum slug length in characters.
pub const SLUG_MAX_LEN: usize = 120;

static NON_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9._-]+").expect("valid slug regex"));

/// Filesystem-safe name for a DOI.
///
/// Runs of characters outside `[A-Za-z0-9._-]` become `_`, leading and
/// trailing `_` are dropped, and the result is cut to [`SLUG_MAX_LEN`].
#[must_use]
pub fn slug(text: &str) -> String {
    let replaced = NON_SLUG.replace_all(text, "_");
    replaced.trim_matches('_').chars().take(SLUG_MAX_LEN).collect()
}

/// Output directory for a DOI.
#[must_use]
pub fn paper_dir(root: &Path, doi: &str) -> PathBuf {
    let name = slug(doi);
    if name.is_empty() { root.join("unknown") } else { root.join(name) }
}

/// Format citer rows as CSV.
///
/// Columns are the union of top-level keys in first-seen order. Nested arrays
/// and objects are written as compact JSON; `null` and missing keys as empty.
#[must_use]
pub fn format_citers_csv(rows: &[CiterSummary]) -> String {
    let mut columns: Vec<&str> = Vec::new();
    for row in rows {
        for key in row.keys() {
            if !columns.contains(&key.as_str()) {
                columns.push(key);
            }
        }
    }

    let mut output = String::new();
    output.push_str(&columns.iter().map(|c| csv_escape(c)).collect::<Vec<_>>().join(","));
    output.push('\n');

    for row in rows {
        let line = columns
            .iter()
            .map(|column| csv_escape(&cell(row.get(*column))))
            .collect::<Vec<_>>()
            .join(",");
        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Write the citer archive into `dir`, creating it if needed.
pub async fn write_citers(dir: &Path, rows: &[CiterSummary]) -> Result<PathBuf, OutputError> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(CITERS_FILE);
    tokio::fs::write(&path, format_citers_csv(rows)).await?;
    tracing::info!(path = %path.display(), rows = rows.len(), "Saved OpenAlex citers");
    Ok(path)
}

/// Write the citation-context document into `dir`, creating it if needed.
pub async fn write_contexts(dir: &Path, rows: &[CitationContext]) -> Result<PathBuf, OutputError> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(CONTEXTS_FILE);
    let body = serde_json::to_string_pretty(rows)?;
    tokio::fs::write(&path, body).await?;
    tracing::info!(path = %path.display(), rows = rows.len(), "Saved citation contexts");
    Ok(path)
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Escape a string for CSV output.
fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
