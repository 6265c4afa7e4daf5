//! Candidate normalization.
//!
//! Turns a raw [`Candidate`] into an [`Article`]: long descriptions are cut,
//! relative links are made absolute against the source origin, and the record
//! is stamped with its source and the local capture time.

use crate::models::{Article, Candidate, NOT_AVAILABLE, Source};
use crate::utils::capture_timestamp;

/// Descriptions longer than this many characters are truncated.
pub const MAX_DESCRIPTION_CHARS: usize = 150;

/// Appended to a truncated description.
pub const ELLIPSIS: &str = "...";

/// Cut `description` to [`MAX_DESCRIPTION_CHARS`] characters plus [`ELLIPSIS`].
///
/// Counts characters, not bytes, so multi-byte text is never split.
pub fn truncate_description(description: &str) -> String {
    match description.char_indices().nth(MAX_DESCRIPTION_CHARS) {
        Some((cut, _)) => format!("{}{}", &description[..cut], ELLIPSIS),
        None => description.to_string(),
    }
}

/// Resolve a raw `href` against `origin`.
///
/// Links that already start with a scheme are returned unchanged, anything
/// else is appended to `origin`. A missing link becomes `"N/A"`.
pub fn resolve_link(origin: &str, raw: Option<&str>) -> String {
    match raw {
        None => NOT_AVAILABLE.to_string(),
        Some(link) if has_scheme(link) => link.to_string(),
        Some(link) => format!("{origin}{link}"),
    }
}

/// `scheme ":"` at the very start of `link`, with the scheme being an ASCII
/// letter followed by letters, digits, `+`, `-` or `.`.
fn has_scheme(link: &str) -> bool {
    let Some((scheme, _)) = link.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Build the final record for `candidate`, stamped now.
pub fn normalize(candidate: Candidate, source: Source) -> Article {
    let description = candidate
        .description
        .as_deref()
        .map(truncate_description)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    Article {
        link: resolve_link(source.origin(), candidate.link.as_deref()),
        title: candidate.title,
        description,
        source,
        captured_at: capture_timestamp(),
    }
}
