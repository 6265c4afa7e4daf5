//! Data models for scraped headlines.
//!
//! - [`Source`]: the fixed set of news sites the pipeline reads from
//! - [`Candidate`]: raw fields pulled out of a page, before normalization
//! - [`Article`]: a normalized record, ready for display or export
//!
//! Missing fields are carried as the [`NOT_AVAILABLE`] sentinel rather than
//! `Option`, so renderers and exporters never branch on absence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder for a field that could not be resolved.
pub const NOT_AVAILABLE: &str = "N/A";

/// A news site the pipeline knows how to scrape.
///
/// | Source | Origin | Listing page |
/// |--------|--------|--------------|
/// | BBC News | `https://www.bbc.com` | `/news` |
/// | Reuters | `https://www.reuters.com` | `/world/` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Source {
    #[serde(rename = "BBC News")]
    Bbc,
    #[serde(rename = "Reuters")]
    Reuters,
}

impl Source {
    /// Human-readable name, also used as the source tag in exports.
    pub fn name(self) -> &'static str {
        match self {
            Source::Bbc => "BBC News",
            Source::Reuters => "Reuters",
        }
    }

    /// Scheme and host prefixed to relative links found on this site.
    pub fn origin(self) -> &'static str {
        match self {
            Source::Bbc => "https://www.bbc.com",
            Source::Reuters => "https://www.reuters.com",
        }
    }

    /// The page the headlines are scraped from.
    pub fn listing_url(self) -> &'static str {
        match self {
            Source::Bbc => "https://www.bbc.com/news",
            Source::Reuters => "https://www.reuters.com/world/",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw fields extracted from one container element.
///
/// `link` and `description` stay `None` when the page did not provide them;
/// the normalizer turns that into [`NOT_AVAILABLE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub title: String,
    pub link: Option<String>,
    pub description: Option<String>,
}

/// A normalized headline record.
///
/// Field order and renames define the export columns:
/// `Title, Description, Link, Source, Scraped_Date`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Article {
    /// Headline text, never empty.
    #[serde(rename = "Title")]
    pub title: String,
    /// Summary text, at most 150 characters plus `"..."`, or `"N/A"`.
    #[serde(rename = "Description")]
    pub description: String,
    /// Absolute article URL, or `"N/A"`.
    #[serde(rename = "Link")]
    pub link: String,
    #[serde(rename = "Source")]
    pub source: Source,
    /// Local time of extraction, `YYYY-MM-DD HH:MM:SS`.
    #[serde(rename = "Scraped_Date")]
    pub captured_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article() -> Article {
        Article {
            title: "Markets rally after rate decision".to_string(),
            description: NOT_AVAILABLE.to_string(),
            link: "https://www.reuters.com/world/markets-rally".to_string(),
            source: Source::Reuters,
            captured_at: "2025-05-06 14:30:00".to_string(),
        }
    }

    #[test]
    fn test_source_display_matches_name() {
        assert_eq!(Source::Bbc.to_string(), "BBC News");
        assert_eq!(Source::Reuters.to_string(), "Reuters");
    }

    #[test]
    fn test_listing_url_starts_with_origin() {
        for source in [Source::Bbc, Source::Reuters] {
            assert!(source.listing_url().starts_with(source.origin()));
        }
    }

    #[test]
    fn test_article_serializes_with_column_names() {
        let json = serde_json::to_value(sample_article()).unwrap();
        assert_eq!(json["Title"], "Markets rally after rate decision");
        assert_eq!(json["Description"], "N/A");
        assert_eq!(json["Source"], "Reuters");
        assert_eq!(json["Scraped_Date"], "2025-05-06 14:30:00");
    }

    #[test]
    fn test_article_deserialization() {
        let json = r#"{
            "Title": "Storm hits coast",
            "Description": "Heavy rain expected",
            "Link": "https://www.bbc.com/news/articles/abc",
            "Source": "BBC News",
            "Scraped_Date": "2025-05-06 08:00:00"
        }"#;

        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.source, Source::Bbc);
        assert_eq!(article.description, "Heavy rain expected");
    }
}
