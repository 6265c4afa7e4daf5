//! Utility functions for timestamps and file system checks.

use chrono::{DateTime, Local};
use std::fs as stdfs;
use std::io;
use tokio::fs;
use tracing::{info, instrument};

/// Format used for `captured_at` on every article.
pub const CAPTURE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format used in export filenames.
pub const FILE_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Current local time as `YYYY-MM-DD HH:MM:SS`.
pub fn capture_timestamp() -> String {
    format_capture(&Local::now())
}

pub fn format_capture(at: &DateTime<Local>) -> String {
    at.format(CAPTURE_FORMAT).to_string()
}

pub fn format_file_stamp(at: &DateTime<Local>) -> String {
    at.format(FILE_STAMP_FORMAT).to_string()
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then writes and removes a probe file.
///
/// # Errors
///
/// Returns the underlying I/O error if the directory cannot be created or
/// is not writable (permission denied, read-only filesystem, etc.).
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> io::Result<()> {
    fs::create_dir_all(path).await?;
    // Sync probe keeps the error surface simple
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    stdfs::File::create(&probe_path)?;
    let _ = stdfs::remove_file(&probe_path);
    info!("Output directory is writable");
    Ok(())
}
