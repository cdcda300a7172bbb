use crate::parse::{Document, Element, char_len, normalize_text};

/// Paragraph selectors tried in order for article body text.
pub const ARTICLE_SELECTORS: &[&str] = &[
    "article p",
    ".post-body p",
    ".entry-content p",
    ".article-body p",
    ".content p",
];

const KEY_PARAGRAPH_MIN_CHARS: usize = 50;
const ARTICLE_PARAGRAPH_MIN_CHARS: usize = 30;
const ARTICLE_MIN_PARAGRAPHS: usize = 2;

/// Normalized direct text nodes of each paragraph, one entry per node.
fn paragraph_fragments<'a>(paragraphs: &'a [Element<'a>]) -> impl Iterator<Item = String> + 'a {
    paragraphs
        .iter()
        .flat_map(|p| p.direct_text_fragments())
        .map(normalize_text)
}

/// Paragraph text nodes longer than 50 characters that contain a letter.
/// Numeric or punctuation-only text is dropped.
pub fn extract_key_paragraphs(doc: &Document) -> Vec<String> {
    paragraph_fragments(&doc.select("p"))
        .filter(|text| char_len(text) > KEY_PARAGRAPH_MIN_CHARS && text.chars().any(|c| c.is_alphabetic()))
        .collect()
}

/// Article paragraph text from the first selector yielding more than two
/// text nodes longer than 30 characters. Results are never merged across
/// selectors.
pub fn extract_article_content(doc: &Document) -> Vec<String> {
    for &selector in ARTICLE_SELECTORS {
        let paragraphs: Vec<String> = paragraph_fragments(&doc.select(selector))
            .filter(|text| char_len(text) > ARTICLE_PARAGRAPH_MIN_CHARS)
            .collect();

        if paragraphs.len() > ARTICLE_MIN_PARAGRAPHS {
            tracing::debug!(selector, paragraphs = paragraphs.len(), "article paragraphs selected");
            return paragraphs;
        }
    }

    Vec::new()
}
