//! Batch-driver entry point: harvest one paper and write its artifacts.

use std::path::PathBuf;

use crate::error::{HarvestFailure, OutputError};
use crate::harvest::{HarvestContext, harvest};
use crate::models::{HarvestOptions, HarvestOutcome, PaperQuery};
use crate::output;

/// One paper as supplied by a batch driver.
#[derive(Debug, Clone, Default)]
pub struct PaperJob {
    /// Paper title.
    pub title: Option<String>,

    /// Paper DOI.
    pub doi: Option<String>,

    /// Root directory for per-paper output directories.
    pub output_root: PathBuf,

    /// Maximum citation contexts; `<= 0` means no cap.
    pub limit: i32,

    /// Archive the OpenAlex citers list.
    pub enable_citer_archive: bool,

    /// Request the third-party (Scopus) citer source.
    pub enable_third_party_source: bool,

    /// Year range for the third-party source.
    pub third_party_year_range: Option<String>,
}

impl PaperJob {
    /// The paper description.
    #[must_use]
    pub fn query(&self) -> PaperQuery {
        PaperQuery::new(self.title.clone(), self.doi.clone())
    }

    /// The harvest switches.
    #[must_use]
    pub fn options(&self) -> HarvestOptions {
        HarvestOptions {
            limit: self.limit,
            enable_citer_archive: self.enable_citer_archive,
            enable_third_party_source: self.enable_third_party_source,
            third_party_year_range: self.third_party_year_range.clone(),
        }
    }
}

/// Artifacts written for a completed harvest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedPaper {
    /// Resolved DOI.
    pub doi: String,

    /// Per-paper output directory.
    pub directory: PathBuf,

    /// Number of archived citers (0 when the archive is disabled or empty).
    pub citers: usize,

    /// Number of citation contexts written.
    pub contexts: usize,

    /// Diagnostics from the harvest.
    pub notices: Vec<String>,
}

/// What happened to one paper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Harvest completed and artifacts were written.
    Saved(SavedPaper),

    /// Harvest stopped at a fatal step; no context document was written.
    Skipped {
        /// Which step failed.
        failure: HarvestFailure,

        /// DOI, when one was determined.
        doi: Option<String>,
    },
}

/// Harvest one paper and write its artifacts.
///
/// A paper that cannot be harvested is reported as [`ProcessOutcome::Skipped`];
/// only filesystem failures are errors. Nothing is written when no DOI can be
/// determined. When the DOI has no Semantic Scholar id, a non-empty citer
/// archive collected beforehand is still written.
pub async fn process_paper(
    ctx: &HarvestContext,
    job: &PaperJob,
) -> Result<ProcessOutcome, OutputError> {
    tracing::info!(title = ?job.title, doi = ?job.doi, "Processing paper");

    match harvest(ctx, &job.query(), &job.options()).await {
        HarvestOutcome::Completed(result) => {
            let directory = output::paper_dir(&job.output_root, &result.identity.doi);

            let mut citers = 0;
            if let Some(rows) = result.citer_rows() {
                if !rows.is_empty() {
                    output::write_citers(&directory, rows).await?;
                    citers = rows.len();
                }
            }

            output::write_contexts(&directory, result.context_rows()).await?;

            Ok(ProcessOutcome::Saved(SavedPaper {
                doi: result.identity.doi.clone(),
                directory,
                citers,
                contexts: result.context_rows().len(),
                notices: result.notices.clone(),
            }))
        }
        HarvestOutcome::Failed { failure, doi, citers } => {
            if let Some(doi) = doi.as_deref() {
                if !citers.is_empty() {
                    let directory = output::paper_dir(&job.output_root, doi);
                    output::write_citers(&directory, &citers).await?;
                }
            }

            tracing::warn!(%failure, doi = ?doi, "Skipping paper");
            Ok(ProcessOutcome::Skipped { failure, doi })
        }
    }
}
