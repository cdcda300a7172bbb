//! AI-ready text composition.

use crate::features::Heading;
use crate::parse::char_len;

const MAX_SECTION_LEVEL: u8 = 3;
const MAX_SECTIONS: usize = 5;
const TRUNCATION_MARKER: &str = "...";

/// Build the prompt body: title, main sections and content, separated by
/// blank lines. Blocks with nothing to say are left out.
///
/// Sections are the first five headings of level 3 or above, in
/// `headings_hierarchy` order. Content is cut to `max_content_chars`
/// characters followed by `...` when longer.
pub fn compose_ai_text(title: &str, headings: &[Heading], main_content: &str, max_content_chars: usize) -> String {
    let mut parts = Vec::with_capacity(3);

    if !title.is_empty() {
        parts.push(format!("Title: {}", title));
    }

    let sections: Vec<&str> = headings
        .iter()
        .filter(|h| h.level <= MAX_SECTION_LEVEL)
        .take(MAX_SECTIONS)
        .map(|h| h.text.as_str())
        .collect();
    if !sections.is_empty() {
        parts.push(format!("Main sections: {}", sections.join(", ")));
    }

    if !main_content.is_empty() {
        parts.push(format!("Content: {}", truncate_chars(main_content, max_content_chars)));
    }

    parts.join("\n\n")
}

/// Keep the first `max_chars` characters, appending `...` if anything was cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if char_len(text) <= max_chars {
        return text.to_string();
    }

    let end = text.char_indices().nth(max_chars).map(|(idx, _)| idx).unwrap_or(text.len());
    format!("{}{}", &text[..end], TRUNCATION_MARKER)
}
