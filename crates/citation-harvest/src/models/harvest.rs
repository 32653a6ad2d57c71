//! Harvest results and per-fetcher termination.

use serde::Serialize;

use super::{CitationContext, CiterSummary, ResolvedIdentity};
use crate::error::{ClientError, HarvestFailure};

/// Why a pagination loop stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Termination {
    /// The source had nothing more to give.
    Exhausted,

    /// The caller's cap was met.
    CapReached,

    /// A request failed; the items collected before it are kept.
    Interrupted {
        /// Description of the failed request.
        reason: String,
    },
}

/// Items collected by a fetcher plus the reason it stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paged<T> {
    /// Items in arrival order.
    pub items: Vec<T>,

    /// Why the fetcher stopped.
    pub termination: Termination,
}

impl<T> Paged<T> {
    /// A complete walk.
    #[must_use]
    pub fn exhausted(items: Vec<T>) -> Self {
        Self { items, termination: Termination::Exhausted }
    }

    /// A walk stopped by the caller's cap.
    #[must_use]
    pub fn capped(items: Vec<T>) -> Self {
        Self { items, termination: Termination::CapReached }
    }

    /// A walk cut short by a failed request.
    #[must_use]
    pub fn interrupted(items: Vec<T>, error: &ClientError) -> Self {
        Self { items, termination: Termination::Interrupted { reason: error.to_string() } }
    }

    /// True when a source failure cut the walk short.
    #[must_use]
    pub const fn is_partial(&self) -> bool {
        matches!(self.termination, Termination::Interrupted { .. })
    }

    /// Number of collected items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Per-paper harvest switches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestOptions {
    /// Maximum citation contexts; `<= 0` means no cap.
    pub limit: i32,

    /// Fetch and archive the OpenAlex citers list.
    pub enable_citer_archive: bool,

    /// Request the third-party (Scopus) citer source, which is not implemented.
    pub enable_third_party_source: bool,

    /// Year range for the third-party source.
    pub third_party_year_range: Option<String>,
}

/// Everything harvested for one resolved DOI.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HarvestResult {
    /// The DOI the harvest ran against.
    pub identity: ResolvedIdentity,

    /// Semantic Scholar paper id for the DOI.
    pub paper_id: String,

    /// OpenAlex citers, when the archive source was enabled.
    pub citers: Option<Paged<CiterSummary>>,

    /// Citation contexts in arrival order.
    pub contexts: Paged<CitationContext>,

    /// Diagnostics for the caller (e.g. skipped sources).
    pub notices: Vec<String>,
}

impl HarvestResult {
    /// Citer rows, if the archive source ran.
    #[must_use]
    pub fn citer_rows(&self) -> Option<&[CiterSummary]> {
        self.citers.as_ref().map(|p| p.items.as_slice())
    }

    /// Citation-context rows.
    #[must_use]
    pub fn context_rows(&self) -> &[CitationContext] {
        &self.contexts.items
    }
}

/// Outcome of one paper's harvest.
#[derive(Debug, Clone)]
pub enum HarvestOutcome {
    /// Harvest finished; partial sources are reflected in each `Paged`.
    Completed(Box<HarvestResult>),

    /// Harvest stopped at a fatal step.
    Failed {
        /// Which step failed.
        failure: HarvestFailure,

        /// DOI, when one was determined before the failure.
        doi: Option<String>,

        /// Citers collected before the failure.
        citers: Vec<CiterSummary>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paged_interrupted_is_partial() {
        let paged = Paged::interrupted(vec![1, 2], &ClientError::server(502, "bad gateway"));
        assert!(paged.is_partial());
        assert_eq!(paged.len(), 2);
        match paged.termination {
            Termination::Interrupted { reason } => assert!(reason.contains("502")),
            other => panic!("unexpected termination: {other:?}"),
        }
    }

    #[test]
    fn test_paged_empty_exhausted_is_not_partial() {
        let paged: Paged<u8> = Paged::exhausted(Vec::new());
        assert!(paged.is_empty());
        assert!(!paged.is_partial());
    }
}
