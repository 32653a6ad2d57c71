//! Data models for both bibliographic services and the harvest pipeline.
//!
//! Wire models use `#[serde(default)]` for every field so that missing or
//! `null` values never fail a page.

mod harvest;
mod identity;
mod openalex;
mod paper;

pub use harvest::{HarvestOptions, HarvestOutcome, HarvestResult, Paged, Termination};
pub use identity::{PaperQuery, ResolvedIdentity, normalize_doi};
pub use openalex::{
    CitersPage, CiterSummary, CursorMeta, WorkCitedBy, WorkSearchResult, WorkSummary,
};
pub use paper::{
    CitationContext, CitationEdge, CitationPage, CitingPaper, ExternalIds, PaperLookup,
};
