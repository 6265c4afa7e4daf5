//! Excel workbook serialization.

use crate::error::ExportError;
use crate::models::Article;
use rust_xlsxwriter::Workbook;

/// Name of the single worksheet in every export.
pub const SHEET_NAME: &str = "News";

/// Header row, matching the serialized [`Article`] field names.
pub const COLUMNS: [&str; 5] = ["Title", "Description", "Link", "Source", "Scraped_Date"];

/// Serialize `articles` to an `.xlsx` workbook, header row first.
pub fn to_xlsx(articles: &[Article]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, header) in (0u16..).zip(COLUMNS) {
        sheet.write_string(0, col, header)?;
    }

    for (row, article) in (1u32..).zip(articles) {
        let cells = [
            article.title.as_str(),
            article.description.as_str(),
            article.link.as_str(),
            article.source.name(),
            article.captured_at.as_str(),
        ];
        for (col, value) in (0u16..).zip(cells) {
            sheet.write_string(row, col, value)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}
