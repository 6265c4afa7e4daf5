//! Reuters world-page scraper.
//!
//! Story links on [Reuters World](https://www.reuters.com/world/) are
//! `a[data-testid="Link"]` anchors with the headline in a nested `h3`, `h2`
//! or `span`. Many such anchors are navigation chrome ("World", "Video"),
//! so headlines shorter than [`MIN_TITLE_CHARS`] are discarded. The page has
//! no reliable summary, so descriptions are never extracted.

use super::{Extractor, first_text, href};
use crate::models::{Candidate, Source};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};
use tracing::trace;

/// Titles with fewer characters than this are treated as noise.
pub const MIN_TITLE_CHARS: usize = 10;

static LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"a[data-testid="Link"]"#).unwrap());
static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("h3, h2, span").unwrap());

#[derive(Debug, Clone, Copy, Default)]
pub struct ReutersExtractor;

impl Extractor for ReutersExtractor {
    fn source(&self) -> Source {
        Source::Reuters
    }

    fn container_selector(&self) -> &Selector {
        &LINK_SELECTOR
    }

    fn candidate(&self, anchor: ElementRef<'_>) -> Option<Candidate> {
        let title = first_text(anchor, &TITLE_SELECTOR)?;
        if title.chars().count() < MIN_TITLE_CHARS {
            trace!(%title, "Reuters title too short; skipping");
            return None;
        }

        Some(Candidate {
            title,
            link: href(anchor),
            description: None,
        })
    }
}
