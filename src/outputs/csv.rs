//! Spreadsheet (CSV) serialization.

use crate::error::ExportError;
use crate::models::Article;

/// Serialize `articles` to CSV bytes, header row first.
pub fn to_csv(articles: &[Article]) -> Result<Vec<u8>, ExportError> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    for article in articles {
        writer.serialize(article)?;
    }
    writer.into_inner().map_err(|e| ExportError::Io(e.into_error()))
}
