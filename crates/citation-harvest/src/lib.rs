//! Citation Harvest
//!
//! Resolves a paper's DOI and harvests the works citing it, together with the
//! text around each citation, from two bibliographic graph services.
//!
//! # Pipeline
//!
//! - **Resolve**: title to DOI via OpenAlex search (first-ranked hit)
//! - **Archive**: every OpenAlex citer via cursor pagination (optional)
//! - **Cross-reference**: DOI to Semantic Scholar paper id
//! - **Contexts**: citation contexts, intents and influence via offset
//!   pagination, capped by the caller's limit
//!
//! Individual page failures end that source early and keep what was
//! collected. Only a missing DOI or a missing paper id stop a paper.
//!
//! # Example
//!
//! ```no_run
//! use citation_harvest::{Config, HarvestContext, PaperJob, process_paper};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let ctx = HarvestContext::from_config(&config)?;
//!
//!     let job = PaperJob {
//!         doi: Some("10.1145/3397271.3401075".into()),
//!         output_root: "out".into(),
//!         limit: 500,
//!         ..Default::default()
//!     };
//!     let outcome = process_paper(&ctx, &job).await?;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod harvest;
pub mod job;
pub mod models;
pub mod output;
pub mod pacing;

pub use client::{OpenAlexClient, SemanticScholarClient};
pub use config::Config;
pub use error::{ClientError, HarvestFailure, OutputError};
pub use harvest::{HarvestContext, harvest};
pub use job::{PaperJob, ProcessOutcome, SavedPaper, process_paper};
