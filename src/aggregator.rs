//! Runs every configured source through fetch, extract and normalize.
//!
//! Sources are scraped one after another in their configured order. A failed
//! fetch is recorded against its source and the run moves on; the combined
//! result is returned even when every source failed.

use crate::error::{FetchError, SourceFailure};
use crate::fetcher::{Fetcher, Page};
use crate::models::Article;
use crate::normalize::normalize;
use crate::scrapers::{Extractor, default_extractors};
use scraper::Html;
use tracing::{info, instrument, warn};

/// Progress hook, called with a status line before each source.
pub type ProgressFn<'a> = dyn Fn(&str) + Send + Sync + 'a;

/// One source to scrape: its extraction rules and the page to fetch.
pub struct Target {
    pub extractor: Box<dyn Extractor>,
    pub url: String,
}

impl Target {
    pub fn new(extractor: Box<dyn Extractor>, url: impl Into<String>) -> Self {
        Self {
            extractor,
            url: url.into(),
        }
    }

    /// Target for the extractor's own listing page.
    pub fn listing(extractor: Box<dyn Extractor>) -> Self {
        let url = extractor.source().listing_url();
        Self::new(extractor, url)
    }
}

/// Outcome of one run.
#[derive(Debug, Default)]
pub struct ScrapeReport {
    /// Articles from every successful source, in source order.
    pub articles: Vec<Article>,
    /// One entry per failed source.
    pub errors: Vec<SourceFailure>,
}

pub struct Aggregator {
    fetcher: Fetcher,
    targets: Vec<Target>,
}

impl Aggregator {
    /// Aggregator over the built-in sources with the default fetcher.
    pub fn new() -> Result<Self, FetchError> {
        let targets = default_extractors().into_iter().map(Target::listing).collect();
        Ok(Self::with_targets(Fetcher::new()?, targets))
    }

    pub fn with_targets(fetcher: Fetcher, targets: Vec<Target>) -> Self {
        Self { fetcher, targets }
    }

    /// Scrape every target in order.
    ///
    /// `progress`, when given, is called with `"Scraping <source>..."` before
    /// each target. It has no effect on control flow.
    #[instrument(level = "info", skip_all, fields(targets = self.targets.len()))]
    pub async fn scrape_all(&self, progress: Option<&ProgressFn<'_>>) -> ScrapeReport {
        let mut report = ScrapeReport::default();

        for target in &self.targets {
            let source = target.extractor.source();
            if let Some(notify) = progress {
                notify(&format!("Scraping {source}..."));
            }

            match self.fetcher.fetch(&target.url).await {
                Ok(page) => {
                    let articles = extract_articles(target.extractor.as_ref(), &page);
                    info!(%source, count = articles.len(), "Scraped source");
                    report.articles.extend(articles);
                }
                Err(error) => {
                    warn!(%source, error = %error, "Source failed; continuing");
                    report.errors.push(SourceFailure { site: source, error });
                }
            }
        }

        info!(
            articles = report.articles.len(),
            errors = report.errors.len(),
            "Scrape run complete"
        );
        report
    }
}

/// Parse `page` and normalize every candidate the extractor finds.
///
/// Kept synchronous: the parsed document is not `Send`.
fn extract_articles(extractor: &dyn Extractor, page: &Page) -> Vec<Article> {
    let document = Html::parse_document(&page.text());
    let source = extractor.source();

    extractor
        .extract(&document)
        .into_iter()
        .map(|candidate| normalize(candidate, source))
        .collect()
}
