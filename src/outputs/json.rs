//! JSON serialization of exported articles.
//!
//! Produces a pretty-printed array whose objects use the same keys as the
//! CSV columns, so either export can be loaded back into [`Article`]s.

use crate::error::ExportError;
use crate::models::Article;

pub fn to_json(articles: &[Article]) -> Result<Vec<u8>, ExportError> {
    Ok(serde_json::to_vec_pretty(articles)?)
}
