//! Per-source headline extractors.
//!
//! Each source gets one [`Extractor`] implementation that knows the page
//! shape of that site. Extraction is split in two steps:
//!
//! 1. **Containers**: select up to [`MAX_CANDIDATES`] elements with the
//!    source's structural marker
//! 2. **Candidate**: pull title, link and description out of one container,
//!    returning `None` to drop it
//!
//! # Supported Sources
//!
//! | Source | Module | Container | Notes |
//! |--------|--------|-----------|-------|
//! | BBC News | [`bbcnews`] | `div[data-testid="card-text-wrapper"]` | Listing cards with description |
//! | Reuters | [`reuters`] | `a[data-testid="Link"]` | Anchors only; short titles filtered |
//!
//! Adding a source means adding a module with one more implementation and
//! listing it in [`default_extractors`].

use crate::models::{Candidate, Source};
use scraper::{ElementRef, Html, Selector};

pub mod bbcnews;
pub mod reuters;

/// Maximum number of containers inspected per page.
pub const MAX_CANDIDATES: usize = 20;

/// Source-specific rules for pulling candidates out of a parsed page.
pub trait Extractor: Send + Sync {
    /// The source this extractor understands.
    fn source(&self) -> Source;

    /// Selector for the elements that each hold at most one headline.
    fn container_selector(&self) -> &Selector;

    /// Extract one candidate from a container, or `None` to drop it.
    fn candidate(&self, container: ElementRef<'_>) -> Option<Candidate>;

    /// Extract candidates from the first [`MAX_CANDIDATES`] containers, in
    /// document order. Dropped containers still count toward the cap.
    fn extract(&self, document: &Html) -> Vec<Candidate> {
        document
            .select(self.container_selector())
            .take(MAX_CANDIDATES)
            .filter_map(|container| self.candidate(container))
            .collect()
    }
}

/// Extractors for every configured source, in scrape order.
pub fn default_extractors() -> Vec<Box<dyn Extractor>> {
    vec![
        Box::new(bbcnews::BbcExtractor),
        Box::new(reuters::ReutersExtractor),
    ]
}

/// Text content with each text node trimmed and empty nodes dropped.
pub(crate) fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Stripped text of the first descendant matching `selector`, if non-empty.
pub(crate) fn first_text(container: ElementRef<'_>, selector: &Selector) -> Option<String> {
    container
        .select(selector)
        .next()
        .map(stripped_text)
        .filter(|text| !text.is_empty())
}

/// Non-empty `href` of an element, surrounding whitespace stripped.
pub(crate) fn href(element: ElementRef<'_>) -> Option<String> {
    element
        .value()
        .attr("href")
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(str::to_string)
}
