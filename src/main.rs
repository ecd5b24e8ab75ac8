//! # News Lexicon
//!
//! Reads a manifest of news-article URLs grouped under topic headers, scrapes
//! each article's body text, and writes a word-frequency table per article
//! plus a per-topic summary of word counts and lexicon-based sentiment.
//!
//! ## Features
//!
//! - Extracts article bodies from New York Times, CNN, and Fox News layouts
//! - Counts case-folded word frequencies with punctuation stripped
//! - Tallies positive and negative words against sorted lexicons via binary search
//! - Writes `token,count` CSV files and an append-only `summary.txt` per topic
//!
//! ## Usage
//!
//! ```sh
//! news_lexicon -m links.txt -p positive-words.txt -n negative-words.txt -o ./out
//! ```
//!
//! ## Architecture
//!
//! The application processes one article at a time, in manifest order:
//! 1. **Resolve**: Match the URL to a configured site
//! 2. **Fetching**: Download the article HTML
//! 3. **Extraction**: Select body paragraphs, strip tags and punctuation
//! 4. **Analysis**: Count words and classify sentiment
//! 5. **Output**: Write the frequency CSV and append to the topic summary

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod analysis;
mod cli;
mod config;
mod error;
mod models;
mod orchestrator;
mod outputs;
mod scrapers;
mod utils;

use analysis::Lexicon;
use cli::Cli;
use config::{AppConfig, Settings, load_config};
use orchestrator::{Orchestrator, load_manifest};
use scrapers::fetch::HttpFetcher;
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_lexicon starting up");

    // Parse CLI and merge config
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let file_config = match &args.config {
        Some(path) => load_config(path).await?,
        None => AppConfig::default(),
    };
    let settings = Settings::resolve(&args, file_config)?;
    info!(
        manifest = %settings.manifest.display(),
        output_dir = %settings.output_dir.display(),
        fetch_failure = ?settings.fetch_failure,
        "Resolved settings"
    );

    // Early check: ensure output dir is writable
    if let Err(e) = ensure_writable_dir(&settings.output_dir).await {
        error!(
            path = %settings.output_dir.display(),
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Load lexicons and manifest ----
    let positive = Lexicon::load(&settings.positive_lexicon, settings.verify_lexicons).await?;
    let negative = Lexicon::load(&settings.negative_lexicon, settings.verify_lexicons).await?;
    for (kind, lexicon, path) in [
        ("positive", &positive, &settings.positive_lexicon),
        ("negative", &negative, &settings.negative_lexicon),
    ] {
        if lexicon.is_empty() {
            warn!(kind, path = %path.display(), "Lexicon has no words; nothing will match it");
        }
    }
    let manifest = load_manifest(&settings.manifest).await?;
    info!(
        positive = positive.len(),
        negative = negative.len(),
        manifest_lines = manifest.lines().count(),
        "Inputs loaded"
    );

    // ---- Run the pipeline ----
    let fetcher = HttpFetcher::new(&settings.user_agent)?;
    let mut orchestrator = Orchestrator::new(
        fetcher,
        settings.output_dir.clone(),
        positive,
        negative,
        settings.fetch_failure,
    );

    let report = match orchestrator.run(&manifest).await {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "Run aborted; outputs for earlier articles are kept");
            return Err(e.into());
        }
    };

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        topics = report.topics,
        articles = report.articles,
        failed_fetches = report.failed_fetches,
        "Execution complete"
    );

    Ok(())
}
