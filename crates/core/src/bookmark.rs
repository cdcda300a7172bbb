//! Bookmark validation and summaries.
//!
//! Clipboard captures and manual input are filtered through [`is_valid_url`]
//! before anything is fetched.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::record::SummarizationRecord;

static BOOKMARK_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^https?://(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+[A-Z]{2,6}\.?|localhost|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})(?::\d+)?(?:/?|[/?]\S+)$",
    )
    .unwrap()
});

/// Whether `candidate` looks like an http(s) URL worth bookmarking.
///
/// Hosts must be a dotted domain name, `localhost`, or a dotted IPv4 address.
///
/// ```rust
/// use linkbrief_core::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/post?id=1"));
/// assert!(!is_valid_url("ftp://example.com"));
/// ```
pub fn is_valid_url(candidate: &str) -> bool {
    BOOKMARK_URL_RE.is_match(candidate)
}

/// The subset of a record kept in the bookmark list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub url: String,
    /// Page title, or the URL itself when the page has none.
    pub title: String,
    pub thumbnail: Option<String>,
}

impl Bookmark {
    pub fn from_record(record: &SummarizationRecord) -> Self {
        let title = if record.title.is_empty() { record.url.clone() } else { record.title.clone() };
        Self { url: record.url.clone(), title, thumbnail: record.thumbnail.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract;

    #[test]
    fn test_valid_urls() {
        for url in [
            "http://example.com",
            "https://example.com/",
            "HTTPS://Sub.Example.co.uk/path/to/page.html",
            "http://localhost:8000/api",
            "http://127.0.0.1/",
            "https://blog.example.com/p/post-e43?ref=daily",
        ] {
            assert!(is_valid_url(url), "{url} should be valid");
        }
    }

    #[test]
    fn test_invalid_urls() {
        for url in [
            "",
            "example.com",
            "ftp://example.com",
            "https://",
            "https://nodot",
            "https://example.com/has space",
            "just some copied text",
        ] {
            assert!(!is_valid_url(url), "{url} should be invalid");
        }
    }

    #[test]
    fn test_bookmark_title_fallback() {
        let record = extract("<body><p>Untitled</p></body>", "https://example.com/x");
        let bookmark = Bookmark::from_record(&record);

        assert_eq!(bookmark.title, "https://example.com/x");
        assert!(bookmark.thumbnail.is_none());
    }

    #[test]
    fn test_bookmark_from_record() {
        let html = r#"<head><title>Saved</title><meta property="og:image" content="https://img.example.com/t.png"></head>"#;
        let bookmark = Bookmark::from_record(&extract(html, "https://example.com/saved"));

        assert_eq!(bookmark.title, "Saved");
        assert_eq!(bookmark.thumbnail.as_deref(), Some("https://img.example.com/t.png"));
    }
}
