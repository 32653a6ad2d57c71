//! Citation Harvest - Entry Point
//!
//! Harvests one paper per invocation. Batch drivers call this binary (or the
//! library's `process_paper`) once per paper.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use citation_harvest::{Config, HarvestContext, PaperJob, ProcessOutcome, process_paper};

#[derive(Parser, Debug)]
#[command(name = "citation-harvest")]
#[command(about = "Harvest citing works and citation contexts for a paper")]
#[command(version)]
struct Cli {
    /// Paper title (used to resolve a DOI when --doi is absent)
    #[arg(long)]
    title: Option<String>,

    /// Paper DOI, bare or as a https://doi.org/ URL
    #[arg(long)]
    doi: Option<String>,

    /// Output root; one subdirectory is created per DOI
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Maximum citation contexts (0 or negative = no cap)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    limit: i32,

    /// Archive the full OpenAlex citers list as CSV
    #[arg(long)]
    openalex: bool,

    /// Request Scopus citers (not implemented; prints a notice)
    #[arg(long)]
    scopus: bool,

    /// Year range for Scopus (e.g. 2019-2024)
    #[arg(long)]
    scopus_year_range: Option<String>,

    /// Semantic Scholar API key (optional, enables higher rate limits)
    #[arg(long, env = "SEMANTIC_SCHOLAR_API_KEY")]
    api_key: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting citation harvest");

    let mut config = Config::from_env()?;
    if cli.api_key.is_some() {
        config.api_key = cli.api_key;
    }
    tracing::debug!(
        openalex = %config.openalex_api_url,
        semantic_scholar = %config.graph_api_url,
        has_api_key = config.has_api_key(),
        "Loaded configuration"
    );
    let ctx = HarvestContext::from_config(&config)?;

    let job = PaperJob {
        title: cli.title,
        doi: cli.doi,
        output_root: cli.out,
        limit: cli.limit,
        enable_citer_archive: cli.openalex,
        enable_third_party_source: cli.scopus,
        third_party_year_range: cli.scopus_year_range,
    };

    match process_paper(&ctx, &job).await? {
        ProcessOutcome::Saved(saved) => {
            for notice in &saved.notices {
                tracing::info!("{notice}");
            }
            tracing::info!(
                doi = %saved.doi,
                directory = %saved.directory.display(),
                citers = saved.citers,
                contexts = saved.contexts,
                "Harvest saved"
            );
            Ok(ExitCode::SUCCESS)
        }
        ProcessOutcome::Skipped { failure, doi } => {
            tracing::error!(%failure, doi = ?doi, "Harvest skipped");
            Ok(ExitCode::from(2))
        }
    }
}
