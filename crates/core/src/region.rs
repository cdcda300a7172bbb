//! Main content region selection.
//!
//! Candidates are tried in a fixed order and the first one whose text is long
//! enough wins. Order decides the result, so [`MAIN_CONTENT_SELECTORS`] must
//! not be reordered.

use crate::config::ExtractConfig;
use crate::parse::{Document, Element, NON_TEXT_TAGS, char_len, normalize_text};

/// Region selectors in priority order: semantic containers first, then common
/// class and id conventions.
pub const MAIN_CONTENT_SELECTORS: &[&str] = &[
    "article",
    "main",
    "[role=\"main\"]",
    ".content",
    ".main-content",
    ".post-content",
    ".entry-content",
    ".article-content",
    "#content",
    "#main",
];

/// Subtrees dropped by the whole-body fallback.
const FALLBACK_SKIP_TAGS: &[&str] = &["script", "style", "nav", "header", "footer"];

/// Where the main content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionSource {
    /// A region selector from [`MAIN_CONTENT_SELECTORS`] matched.
    Selector(&'static str),
    /// No selector was long enough; body text was used.
    Fallback,
}

/// The selected main content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainContent {
    pub text: String,
    pub source: RegionSource,
}

/// Extract the page's primary content as one whitespace-normalized string.
pub fn extract_main_content(doc: &Document, config: &ExtractConfig) -> MainContent {
    let mut last_candidate = None;

    for &selector in MAIN_CONTENT_SELECTORS {
        let fragments: Vec<&str> = outermost(doc.select(selector))
            .iter()
            .flat_map(|el| el.text_fragments_skipping(NON_TEXT_TAGS))
            .collect();
        if fragments.is_empty() {
            continue;
        }

        let text = join_fragments(fragments.into_iter(), 1);
        let len = char_len(&text);

        if len > config.min_main_content_chars {
            tracing::debug!(selector, chars = len, "main content region selected");
            return MainContent { text, source: RegionSource::Selector(selector) };
        }
        tracing::trace!(selector, chars = len, "region candidate too short");
        last_candidate = Some((selector, text));
    }

    // The last candidate with any text survives when it lands exactly on the threshold.
    if let Some((selector, text)) = last_candidate
        && !text.is_empty()
        && char_len(&text) >= config.min_main_content_chars
    {
        tracing::debug!(selector, chars = char_len(&text), "main content region kept at threshold");
        return MainContent { text, source: RegionSource::Selector(selector) };
    }

    let text = doc
        .select("body")
        .first()
        .map(|body| {
            join_fragments(
                body.text_fragments_skipping(FALLBACK_SKIP_TAGS).into_iter(),
                config.min_fallback_fragment_chars,
            )
        })
        .unwrap_or_default();

    tracing::debug!(chars = char_len(&text), "no region selector matched, using body text");
    MainContent { text, source: RegionSource::Fallback }
}

/// Clean each fragment, drop those shorter than `min_chars`, join with spaces.
fn join_fragments<'a>(fragments: impl Iterator<Item = &'a str>, min_chars: usize) -> String {
    fragments
        .map(normalize_text)
        .filter(|fragment| !fragment.is_empty() && char_len(fragment) >= min_chars)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Drop matches nested inside an earlier match so no text is read twice.
fn outermost(matches: Vec<Element<'_>>) -> Vec<Element<'_>> {
    let mut kept: Vec<Element<'_>> = Vec::with_capacity(matches.len());
    for el in matches {
        if !kept.iter().any(|outer| el.is_inside(outer)) {
            kept.push(el);
        }
    }
    kept
}
