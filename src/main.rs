//! # News Scrape
//!
//! Scrapes the latest headlines from BBC News and Reuters, prints them to the
//! terminal, and optionally exports them to a spreadsheet.
//!
//! ## Usage
//!
//! ```sh
//! news_scrape --export -o ./exports
//! ```
//!
//! ## Architecture
//!
//! The scrape runs as a pipeline on a background task:
//! 1. **Fetching**: Download each source's listing page
//! 2. **Extraction**: Apply the source's rules to pull headline candidates
//! 3. **Normalization**: Truncate, resolve links, stamp source and time
//! 4. **Aggregation**: Combine sources in order, collecting per-source failures
//!
//! Progress and the final report travel back over a channel; the foreground
//! renders them and then runs the export, if requested.

use clap::Parser;
use std::error::Error;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod aggregator;
mod cli;
mod error;
mod fetcher;
mod models;
mod normalize;
mod outputs;
mod scrapers;
mod utils;
mod worker;

use aggregator::Aggregator;
use cli::Cli;
use models::Article;
use outputs::{ExportFormat, ExportOutcome, console, export};
use worker::ScrapeEvent;

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
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();
    info!("news_scrape starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // ---- Scrape on a background task ----
    let aggregator = Arc::new(Aggregator::new()?);
    let (handle, mut events) = worker::spawn(aggregator);

    let mut report = None;
    while let Some(event) = events.recv().await {
        match event {
            ScrapeEvent::Progress(message) => eprintln!("{message}"),
            ScrapeEvent::Finished(finished) => report = Some(finished),
        }
    }
    handle.await?;
    let report = report.ok_or("scrape worker exited without a report")?;

    print!("{}", console::render_report(&report));
    eprintln!("{}", console::summary_line(&report));

    // ---- Export ----
    let exported = if args.export {
        export_report(&report.articles, &args.output_dir, args.format).await
    } else {
        Ok(())
    };

    if !report.errors.is_empty() {
        warn!(failed_sources = report.errors.len(), "Some sources failed");
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        articles = report.articles.len(),
        errors = report.errors.len(),
        "Execution complete"
    );

    exported
}

/// Export `articles` and tell the user where they went.
///
/// An empty run is reported but not an error; a failed write is, so the
/// process exits non-zero.
async fn export_report(
    articles: &[Article],
    output_dir: &str,
    format: ExportFormat,
) -> Result<(), Box<dyn Error>> {
    match export(articles, output_dir, format).await {
        Ok(ExportOutcome::Written { path, count }) => {
            eprintln!("Exported {count} articles to: {}", path.display());
        }
        Ok(ExportOutcome::Empty) => {
            eprintln!("No articles to export!");
        }
        Err(e) => {
            error!(error = %e, %output_dir, "Export failed");
            eprintln!("Failed to export: {e}");
            return Err(e.into());
        }
    }
    Ok(())
}
