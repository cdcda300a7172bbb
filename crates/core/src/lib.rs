//! Summarization-ready content extraction for bookmarked pages.
//!
//! [`extract`] turns one HTML page into a [`SummarizationRecord`]: metadata,
//! the heuristically selected main content, structural features (headings,
//! paragraphs, lists, quotes, tables), statistics and a bounded AI-ready text.
//! [`classify_and_render`] turns a record into the prompt handed to a
//! language model.
//!
//! ```rust
//! use linkbrief_core::{classify_and_render, extract, ContentType};
//!
//! let html = "<html><head><title>Notes</title></head><body><article><p>Short.</p></article></body></html>";
//! let record = extract(html, "https://example.com/notes");
//! let (content_type, prompt) = classify_and_render(&record);
//!
//! assert_eq!(content_type, ContentType::GeneralContent);
//! assert!(prompt.contains("URL: https://example.com/notes"));
//! ```

pub mod bookmark;
pub mod compose;
pub mod config;
pub mod error;
pub mod features;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod metadata;
pub mod parse;
pub mod preprocess;
pub mod prompt;
pub mod record;
pub mod region;
pub mod stats;

pub use bookmark::{Bookmark, is_valid_url};
pub use compose::compose_ai_text;
pub use config::{ExtractConfig, ExtractConfigBuilder};
pub use error::{LinkbriefError, Result};
pub use features::{Heading, ListSummary, Quote, QuoteKind, TableSummary};
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, FetchedPage, fetch_file, fetch_stdin, fetch_url};
pub use metadata::Metadata;
pub use parse::Document;
#[doc(hidden)]
pub use preprocess::{PreprocessConfig, preprocess_html};
pub use prompt::{ContentType, PreparedPrompt, classify_and_render, classify_content};
pub use record::{SummarizationRecord, extract, extract_with_config};
pub use region::{MAIN_CONTENT_SELECTORS, MainContent, RegionSource, extract_main_content};
pub use stats::ContentStats;
