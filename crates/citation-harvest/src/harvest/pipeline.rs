//! Per-paper harvest orchestration.

use super::{HarvestContext, fetch_all_citers, fetch_contexts, lookup_paper_id, resolve_doi};
use crate::error::HarvestFailure;
use crate::models::{
    HarvestOptions, HarvestOutcome, HarvestResult, PaperQuery, Paged, ResolvedIdentity,
};

/// Diagnostic emitted when the third-party citer source is requested.
pub const THIRD_PARTY_NOTICE: &str =
    "Scopus full citer retrieval is not implemented; it requires separate entitlement";

/// Harvest one paper.
///
/// Linear: resolve the DOI (unless given), optionally archive OpenAlex
/// citers, look up the Semantic Scholar id, fetch citation contexts. Only a
/// missing DOI or a missing paper id stop the harvest; both come back as
/// [`HarvestOutcome::Failed`]. Citers collected before a missing paper id are
/// handed back so the caller can still archive them.
pub async fn harvest(
    ctx: &HarvestContext,
    query: &PaperQuery,
    options: &HarvestOptions,
) -> HarvestOutcome {
    if query.is_empty() {
        tracing::warn!("Paper has neither a title nor a DOI");
        return HarvestOutcome::Failed {
            failure: HarvestFailure::UnresolvableIdentity,
            doi: None,
            citers: Vec::new(),
        };
    }

    let identity = match query.doi() {
        Some(doi) => ResolvedIdentity { doi, matched_title: None },
        None => {
            let title = query.title().unwrap_or_default();
            let resolved = resolve_doi(&ctx.openalex, title).await;
            match resolved.doi {
                Some(doi) => ResolvedIdentity { doi, matched_title: resolved.matched_title },
                None => {
                    tracing::warn!(title = ?query.title(), "Could not resolve DOI");
                    return HarvestOutcome::Failed {
                        failure: HarvestFailure::UnresolvableIdentity,
                        doi: None,
                        citers: Vec::new(),
                    };
                }
            }
        }
    };

    tracing::info!(doi = %identity.doi, matched_title = ?identity.matched_title, "Resolved DOI");

    let citers = if options.enable_citer_archive {
        let citers = fetch_all_citers(&ctx.openalex, &identity.doi).await;
        log_step("openalex_citers", &identity.doi, &citers);
        Some(citers)
    } else {
        None
    };

    let Some(paper_id) = lookup_paper_id(&ctx.semantic_scholar, &identity.doi).await else {
        tracing::warn!(doi = %identity.doi, "Semantic Scholar paper id not found");
        return HarvestOutcome::Failed {
            failure: HarvestFailure::UnresolvableCrossReference,
            doi: Some(identity.doi),
            citers: citers.map(|c| c.items).unwrap_or_default(),
        };
    };

    let contexts = fetch_contexts(&ctx.semantic_scholar, &paper_id, options.limit).await;
    log_step("citation_contexts", &identity.doi, &contexts);

    let mut notices = Vec::new();
    if options.enable_third_party_source {
        tracing::info!(year_range = ?options.third_party_year_range, "{}", THIRD_PARTY_NOTICE);
        notices.push(THIRD_PARTY_NOTICE.to_string());
    }

    HarvestOutcome::Completed(Box::new(HarvestResult {
        identity,
        paper_id,
        citers,
        contexts,
        notices,
    }))
}

fn log_step<T>(step: &str, doi: &str, paged: &Paged<T>) {
    if paged.is_partial() {
        tracing::warn!(step, doi, items = paged.len(), termination = ?paged.termination, "Source stopped early");
    } else if paged.is_empty() {
        tracing::info!(step, doi, termination = ?paged.termination, "Source has no records");
    } else {
        tracing::info!(step, doi, items = paged.len(), termination = ?paged.termination, "Source done");
    }
}
