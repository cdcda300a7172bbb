//! Content-type classification and prompt rendering.
//!
//! The rendered prompt is consumed by an external language model as-is, so
//! [`PreparedPrompt::render`] reproduces its template byte for byte.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::features::headings::first_in_document_order;
use crate::record::SummarizationRecord;

const NEWS_HEADING_WINDOW: usize = 3;
const LONG_FORM_MIN_WORDS: usize = 1500;
const STRUCTURED_MIN_HEADINGS: usize = 5;

/// The kind of page, used to steer the summarizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    NewsArticle,
    LongFormArticle,
    DataHeavyContent,
    StructuredGuide,
    GeneralContent,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::NewsArticle => "news_article",
            ContentType::LongFormArticle => "long_form_article",
            ContentType::DataHeavyContent => "data_heavy_content",
            ContentType::StructuredGuide => "structured_guide",
            ContentType::GeneralContent => "general_content",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a record. The first matching rule wins:
///
/// 1. one of the first three headings (document order) mentions "news"
/// 2. more than 1500 words of main content
/// 3. at least one table
/// 4. more than five headings
/// 5. anything else
pub fn classify_content(record: &SummarizationRecord) -> ContentType {
    let mentions_news = first_in_document_order(&record.headings_hierarchy, NEWS_HEADING_WINDOW)
        .iter()
        .any(|h| h.text.to_lowercase().contains("news"));

    if mentions_news {
        ContentType::NewsArticle
    } else if record.content_stats.word_count > LONG_FORM_MIN_WORDS {
        ContentType::LongFormArticle
    } else if !record.table_summaries.is_empty() {
        ContentType::DataHeavyContent
    } else if record.headings_hierarchy.len() > STRUCTURED_MIN_HEADINGS {
        ContentType::StructuredGuide
    } else {
        ContentType::GeneralContent
    }
}

/// The values substituted into the summarization prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedPrompt {
    pub title: String,
    pub url: String,
    /// The record's AI-ready text.
    pub main_content: String,
    pub content_type: ContentType,
    pub reading_time: usize,
}

impl PreparedPrompt {
    pub fn from_record(record: &SummarizationRecord) -> Self {
        Self {
            title: record.title.clone(),
            url: record.url.clone(),
            main_content: record.ai_ready_text.clone(),
            content_type: classify_content(record),
            reading_time: record.content_stats.estimated_reading_time,
        }
    }

    /// Render the summarization prompt.
    pub fn render(&self) -> String {
        format!(
            "\nPlease summarize the following webpage content:\n\n\
             Title: {}\n\
             URL: {}\n\
             Estimated reading time: {} minutes\n\
             Content type: {}\n\n\
             Content:\n\
             {}\n\n\
             Please provide:\n\
             1. A brief summary (2-3 sentences)\n\
             2. Key points (3-5 bullet points)\n\
             3. Main topic/theme\n",
            self.title, self.url, self.reading_time, self.content_type, self.main_content
        )
    }
}

/// Classify a record and render its prompt in one step.
pub fn classify_and_render(record: &SummarizationRecord) -> (ContentType, String) {
    let prompt = PreparedPrompt::from_record(record);
    (prompt.content_type, prompt.render())
}
