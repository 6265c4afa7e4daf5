//! Typed failures for the scrape pipeline and the exporters.

use crate::models::Source;
use reqwest::StatusCode;
use thiserror::Error;

/// A failed page download. Fails the whole source for the current run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("timed out after {timeout_secs}s fetching {url}")]
    Timeout { url: String, timeout_secs: u64 },

    #[error("HTTP {status} for url ({url})")]
    Status { url: String, status: StatusCode },

    #[error("request to {url} failed: {cause}")]
    Request {
        url: String,
        #[source]
        cause: reqwest::Error,
    },
}

/// A fetch failure attributed to the source it happened on.
#[derive(Debug, Error)]
#[error("Error scraping {site}: {error}")]
pub struct SourceFailure {
    pub site: Source,
    #[source]
    pub error: FetchError,
}

/// A failed export. Never touches the in-memory articles.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("workbook serialization failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
