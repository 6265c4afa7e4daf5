//! BBC News listing-card scraper.
//!
//! The [BBC News](https://www.bbc.com/news) front page renders each story as
//! a card. The text part of a card is a `div[data-testid="card-text-wrapper"]`
//! holding an `h2` headline and an optional `p` summary; the card's link is
//! an `a` element wrapping the whole thing.

use super::{Extractor, first_text, href};
use crate::models::{Candidate, Source};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};
use tracing::trace;

static CARD_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"div[data-testid="card-text-wrapper"]"#).unwrap());
static HEADLINE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("h2").unwrap());
static SUMMARY_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

#[derive(Debug, Clone, Copy, Default)]
pub struct BbcExtractor;

impl Extractor for BbcExtractor {
    fn source(&self) -> Source {
        Source::Bbc
    }

    fn container_selector(&self) -> &Selector {
        &CARD_SELECTOR
    }

    fn candidate(&self, card: ElementRef<'_>) -> Option<Candidate> {
        let Some(title) = first_text(card, &HEADLINE_SELECTOR) else {
            trace!("BBC card without headline; skipping");
            return None;
        };

        Some(Candidate {
            title,
            link: enclosing_link(card),
            description: first_text(card, &SUMMARY_SELECTOR),
        })
    }
}

/// `href` of the nearest ancestor anchor.
fn enclosing_link(card: ElementRef<'_>) -> Option<String> {
    card.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "a")
        .and_then(href)
}
