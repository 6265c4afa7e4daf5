//! Presentation and export of scrape results.
//!
//! # Submodules
//!
//! - [`console`]: Renders a [`ScrapeReport`](crate::aggregator::ScrapeReport) as text
//! - [`xlsx`]: Writes articles as an Excel workbook (one row per article)
//! - [`csv`]: Writes the same rows as comma-separated text
//! - [`json`]: Writes articles as a JSON array with the same field names
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── news_scrape_20250506_143000.xlsx
//! ├── news_scrape_20250506_150101.csv
//! └── news_scrape_20250506_151212.json
//! ```
//!
//! Every export writes a new file named after the export time. Columns are
//! `Title, Description, Link, Source, Scraped_Date`.

use crate::error::ExportError;
use crate::models::Article;
use crate::utils::{ensure_writable_dir, format_file_stamp};
use chrono::{DateTime, Local};
use clap::ValueEnum;
use std::path::PathBuf;
use tokio::fs;
use tracing::{info, instrument, warn};

pub mod console;
pub mod csv;
pub mod json;
pub mod xlsx;

/// File format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// Excel workbook with a header row
    #[default]
    Xlsx,
    /// Comma-separated values with a header row
    Csv,
    /// Pretty-printed JSON array
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// What an export call did.
#[derive(Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Nothing to export; no file was written.
    Empty,
    Written { path: PathBuf, count: usize },
}

/// `news_scrape_<YYYYMMDD>_<HHMMSS>.<ext>`
pub fn export_filename(at: &DateTime<Local>, format: ExportFormat) -> String {
    format!("news_scrape_{}.{}", format_file_stamp(at), format.extension())
}

/// Write `articles` to a new file in `output_dir`.
///
/// An empty slice is not an error: it logs a warning and returns
/// [`ExportOutcome::Empty`] without touching the file system.
///
/// # Errors
///
/// Returns an [`ExportError`] if the directory is not writable or
/// serialization fails.
#[instrument(level = "info", skip(articles), fields(count = articles.len()))]
pub async fn export(
    articles: &[Article],
    output_dir: &str,
    format: ExportFormat,
) -> Result<ExportOutcome, ExportError> {
    if articles.is_empty() {
        warn!("No articles to export");
        return Ok(ExportOutcome::Empty);
    }

    ensure_writable_dir(output_dir).await?;

    let contents = match format {
        ExportFormat::Xlsx => xlsx::to_xlsx(articles)?,
        ExportFormat::Csv => csv::to_csv(articles)?,
        ExportFormat::Json => json::to_json(articles)?,
    };

    let path = PathBuf::from(output_dir).join(export_filename(&Local::now(), format));
    fs::write(&path, contents).await?;
    info!(path = %path.display(), "Wrote export");

    Ok(ExportOutcome::Written {
        path,
        count: articles.len(),
    })
}
