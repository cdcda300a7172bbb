//! The summarization record and the extraction entry points.
//!
//! [`extract`] turns one fetched page into a [`SummarizationRecord`]. It is a
//! pure, synchronous computation over a document it owns, so independent pages
//! can be processed on as many threads as the caller likes.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::compose::compose_ai_text;
use crate::config::ExtractConfig;
use crate::features::{
    Heading, ListSummary, Quote, TableSummary, extract_article_content, extract_headings, extract_important_lists,
    extract_key_paragraphs, extract_quotes, extract_table_summaries,
};
use crate::parse::Document;
use crate::region::extract_main_content;
use crate::stats::ContentStats;
use crate::Result;

/// Everything extracted from one page, ready for storage or prompting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizationRecord {
    pub url: String,
    pub title: String,
    pub meta_description: String,
    pub thumbnail: Option<String>,
    pub main_content: String,
    pub image_urls: Vec<String>,
    pub headings_hierarchy: Vec<Heading>,
    pub key_paragraphs: Vec<String>,
    pub article_content: Vec<String>,
    pub important_lists: Vec<ListSummary>,
    pub key_quotes: Vec<Quote>,
    pub table_summaries: Vec<TableSummary>,
    pub content_stats: ContentStats,
    pub ai_ready_text: String,
}

impl SummarizationRecord {
    /// Serializes the record as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the record as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Extract a record from a page using the default thresholds.
///
/// # Example
///
/// ```rust
/// use linkbrief_core::extract;
///
/// let html = "<html><head><title>Hello</title></head><body><p>Hi</p></body></html>";
/// let record = extract(html, "https://example.com/");
/// assert_eq!(record.title, "Hello");
/// assert_eq!(record.content_stats.estimated_reading_time, 1);
/// ```
pub fn extract(html: &str, source_url: &str) -> SummarizationRecord {
    extract_with_config(html, source_url, &ExtractConfig::default())
}

/// Extract a record from a page.
///
/// Never fails: unparseable markup and missing elements leave the affected
/// fields empty. `source_url` is copied into the record as given and, when it
/// parses, used to absolutize image and thumbnail links.
pub fn extract_with_config(html: &str, source_url: &str, config: &ExtractConfig) -> SummarizationRecord {
    let base_url = Url::parse(source_url).ok();
    if base_url.is_none() && !source_url.is_empty() {
        tracing::debug!(source_url, "source URL does not parse, links stay relative");
    }

    let doc = Document::parse_with_preprocessing(html, base_url);
    let metadata = doc.extract_metadata();
    let main = extract_main_content(&doc, config);
    let headings_hierarchy = extract_headings(&doc);

    let content_stats = ContentStats::compute(&doc, &main.text, config.words_per_minute);
    let ai_ready_text = compose_ai_text(&metadata.title, &headings_hierarchy, &main.text, config.max_ai_text_chars);

    let record = SummarizationRecord {
        url: source_url.to_string(),
        title: metadata.title,
        meta_description: metadata.meta_description,
        thumbnail: metadata.thumbnail,
        image_urls: metadata.image_urls,
        key_paragraphs: extract_key_paragraphs(&doc),
        article_content: extract_article_content(&doc),
        important_lists: extract_important_lists(&doc),
        key_quotes: extract_quotes(&doc, config.quotes_per_style),
        table_summaries: extract_table_summaries(&doc),
        main_content: main.text,
        headings_hierarchy,
        content_stats,
        ai_ready_text,
    };

    tracing::debug!(
        url = %record.url,
        words = record.content_stats.word_count,
        headings = record.headings_hierarchy.len(),
        paragraphs = record.key_paragraphs.len(),
        quotes = record.key_quotes.len(),
        tables = record.table_summaries.len(),
        "page extracted"
    );

    record
}
