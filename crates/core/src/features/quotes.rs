use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::parse::{Document, char_len, normalize_text};

const MIN_BLOCKQUOTE_CHARS: usize = 20;

static DOUBLE_QUOTED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""([^"]{30,200})""#).unwrap());

static SINGLE_QUOTED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"'([^']{30,200})'").unwrap());

/// Where a quote was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteKind {
    Blockquote,
    QuotedText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(rename = "type")]
    pub kind: QuoteKind,
    pub text: String,
}

/// Blockquotes followed by quoted spans mined from the whole page text.
///
/// The two sources are independent and may overlap. Quoted spans are capped
/// at `per_style` matches for double quotes and, separately, for single
/// quotes.
pub fn extract_quotes(doc: &Document, per_style: usize) -> Vec<Quote> {
    let mut quotes: Vec<Quote> = doc
        .select("blockquote")
        .iter()
        .map(|el| el.spaced_text())
        .filter(|text| char_len(text) > MIN_BLOCKQUOTE_CHARS)
        .map(|text| Quote { kind: QuoteKind::Blockquote, text })
        .collect();

    let page_text = doc.text_fragments().join(" ");
    for pattern in [&*DOUBLE_QUOTED_RE, &*SINGLE_QUOTED_RE] {
        quotes.extend(
            pattern
                .captures_iter(&page_text)
                .filter_map(|caps| caps.get(1))
                .take(per_style)
                .map(|m| Quote { kind: QuoteKind::QuotedText, text: normalize_text(m.as_str()) }),
        );
    }

    quotes
}
