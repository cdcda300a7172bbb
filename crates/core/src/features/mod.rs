//! Structured feature extractors.
//!
//! Each extractor reads the whole [`Document`](crate::parse::Document)
//! independently of the main content region.

pub mod headings;
pub mod lists;
pub mod paragraphs;
pub mod quotes;
pub mod tables;

pub use headings::{Heading, extract_headings};
pub use lists::{ListSummary, extract_important_lists};
pub use paragraphs::{extract_article_content, extract_key_paragraphs};
pub use quotes::{Quote, QuoteKind, extract_quotes};
pub use tables::{TableSummary, extract_table_summaries};
