//! Plain-text rendering of a scrape report for the terminal.

use crate::aggregator::ScrapeReport;
use crate::models::NOT_AVAILABLE;
use std::fmt::Write;

const RULE_WIDTH: usize = 80;

/// Render every article, the total, and any per-source errors.
///
/// Descriptions equal to `"N/A"` are left out of the listing.
pub fn render_report(report: &ScrapeReport) -> String {
    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);

    if report.articles.is_empty() {
        writeln!(out, "No articles found.").unwrap();
    }

    for (idx, article) in report.articles.iter().enumerate() {
        writeln!(out, "\n{rule}").unwrap();
        writeln!(out, "Article #{}", idx + 1).unwrap();
        writeln!(out, "Source: {}", article.source).unwrap();
        writeln!(out, "Title: {}", article.title).unwrap();
        if article.description != NOT_AVAILABLE {
            writeln!(out, "Description: {}", article.description).unwrap();
        }
        writeln!(out, "Link: {}", article.link).unwrap();
        writeln!(out, "Scraped: {}", article.captured_at).unwrap();
    }

    if !report.articles.is_empty() {
        writeln!(out, "\nTotal Articles: {}", report.articles.len()).unwrap();
    }

    if !report.errors.is_empty() {
        writeln!(out, "\nErrors:").unwrap();
        for error in &report.errors {
            writeln!(out, "- {error}").unwrap();
        }
    }

    out
}

/// One-line status after a run, e.g. `Successfully scraped 12 articles!`.
pub fn summary_line(report: &ScrapeReport) -> String {
    match report.articles.len() {
        0 => "No articles found".to_string(),
        n => format!("Successfully scraped {n} articles!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FetchError, SourceFailure};
    use crate::models::{Article, Source};

    fn article(description: &str) -> Article {
        Article {
            title: "Parliament passes budget".to_string(),
            description: description.to_string(),
            link: "https://www.bbc.com/news/articles/b1".to_string(),
            source: Source::Bbc,
            captured_at: "2025-05-06 14:30:00".to_string(),
        }
    }

    fn failure() -> SourceFailure {
        SourceFailure {
            site: Source::Reuters,
            error: FetchError::Timeout {
                url: "https://www.reuters.com/world/".to_string(),
                timeout_secs: 10,
            },
        }
    }

    #[test]
    fn test_renders_articles_and_total() {
        let report = ScrapeReport {
            articles: vec![article("Vote was close"), article(NOT_AVAILABLE)],
            errors: vec![],
        };

        let text = render_report(&report);

        assert!(text.contains("Article #1\nSource: BBC News\nTitle: Parliament passes budget\n"));
        assert!(text.contains("Description: Vote was close\n"));
        assert_eq!(text.matches("Description:").count(), 1);
        assert!(text.contains("Total Articles: 2"));
        assert!(!text.contains("Errors:"));
    }

    #[test]
    fn test_renders_empty_report_with_errors() {
        let report = ScrapeReport {
            articles: vec![],
            errors: vec![failure()],
        };

        let text = render_report(&report);

        assert!(text.starts_with("No articles found.\n"));
        assert!(text.contains("Errors:\n- Error scraping Reuters: timed out after 10s"));
        assert_eq!(summary_line(&report), "No articles found");
    }

    #[test]
    fn test_summary_line_counts_articles() {
        let report = ScrapeReport {
            articles: vec![article(NOT_AVAILABLE); 3],
            errors: vec![],
        };
        assert_eq!(summary_line(&report), "Successfully scraped 3 articles!");
    }
}
