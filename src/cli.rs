//! Command-line interface definitions for News Scrape.
//!
//! All options can be provided via command-line flags or environment variables.

use crate::outputs::ExportFormat;
use clap::Parser;

/// Command-line arguments for the News Scrape application.
///
/// # Examples
///
/// ```sh
/// # Scrape and print the results
/// news_scrape
///
/// # Scrape, then export a spreadsheet into ./exports
/// news_scrape --export -o ./exports
///
/// # Export as CSV or JSON instead of a workbook
/// news_scrape -e -f csv
/// news_scrape -e -f json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Export the scraped articles after the run
    #[arg(short, long, env = "NEWS_SCRAPE_EXPORT")]
    pub export: bool,

    /// Directory the export file is written to
    #[arg(short, long, env = "NEWS_SCRAPE_OUTPUT_DIR", default_value = ".")]
    pub output_dir: String,

    /// Export file format
    #[arg(short, long, env = "NEWS_SCRAPE_FORMAT", value_enum, default_value_t = ExportFormat::Xlsx)]
    pub format: ExportFormat,
}
