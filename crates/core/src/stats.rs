//! Content statistics.

use serde::{Deserialize, Serialize};

use crate::parse::{Document, char_len};

/// Size figures for a page, mostly measured on its main content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStats {
    /// Whitespace-separated tokens in the main content.
    pub word_count: usize,
    /// Characters in the main content.
    pub character_count: usize,
    /// Every `<p>` on the page, unfiltered.
    pub paragraph_count: usize,
    /// Every `h1`-`h6` on the page, unfiltered.
    pub heading_count: usize,
    /// Whole minutes, never less than one.
    pub estimated_reading_time: usize,
}

impl ContentStats {
    pub fn compute(doc: &Document, main_content: &str, words_per_minute: usize) -> Self {
        let word_count = main_content.split_whitespace().count();

        Self {
            word_count,
            character_count: char_len(main_content),
            paragraph_count: doc.count("p"),
            heading_count: doc.count("h1, h2, h3, h4, h5, h6"),
            estimated_reading_time: estimated_reading_time(word_count, words_per_minute),
        }
    }
}

/// `max(1, words / words_per_minute)` with integer division.
pub fn estimated_reading_time(word_count: usize, words_per_minute: usize) -> usize {
    (word_count / words_per_minute.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_time() {
        assert_eq!(estimated_reading_time(0, 200), 1);
        assert_eq!(estimated_reading_time(199, 200), 1);
        assert_eq!(estimated_reading_time(400, 200), 2);
        assert_eq!(estimated_reading_time(599, 200), 2);
        assert_eq!(estimated_reading_time(10, 0), 10);
    }

    #[test]
    fn test_compute_counts_raw_elements() {
        let html = "<h1>A</h1><h2></h2><p></p><p>one</p><p>two</p>";
        let doc = Document::parse(html);
        let stats = ContentStats::compute(&doc, "  three small\twords ", 200);

        assert_eq!(stats.word_count, 3);
        assert_eq!(stats.character_count, 20);
        assert_eq!(stats.paragraph_count, 3);
        assert_eq!(stats.heading_count, 2);
        assert_eq!(stats.estimated_reading_time, 1);
    }
}
