//! HTML parsing and DOM navigation.
//!
//! This module provides the [`Document`] and [`Element`] types: an owned,
//! leniently parsed page and borrowed views into it. Parsing never fails;
//! broken markup produces whatever tree html5ever can recover.
//!
//! Every text accessor here skips `<script>` and `<style>` subtrees, so any
//! region an extractor selects gets the same exclusion.
//!
//! # Example
//!
//! ```rust
//! use linkbrief_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <h1>Title</h1>
//!             <p class="content">Paragraph<script>ignored()</script></p>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html);
//! let paragraphs = doc.select("p.content");
//! assert_eq!(paragraphs[0].text(), "Paragraph");
//! ```

use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::preprocess::{PreprocessConfig, preprocess_html};

/// Subtrees whose text never counts as page text.
pub const NON_TEXT_TAGS: &[&str] = &["script", "style"];

/// Collapse whitespace runs into single spaces and trim both ends.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Length in Unicode scalar values.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Parse a CSS selector, logging instead of failing on bad input.
pub(crate) fn compile_selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            tracing::warn!(selector = css, error = %e, "invalid CSS selector");
            None
        }
    }
}

/// Represents a parsed HTML document.
///
/// A Document owns the parsed tree of one response plus the URL it came
/// from, which is used to absolutize resource links.
pub struct Document {
    html: Html,
    base_url: Option<Url>,
}

impl Document {
    /// Parses HTML from a string without preprocessing.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html), base_url: None }
    }

    /// Parses HTML after stripping noise elements.
    ///
    /// # Arguments
    ///
    /// * `html` - The HTML content to parse
    /// * `base_url` - Optional base URL for resolving relative links
    ///
    /// # Example
    ///
    /// ```rust
    /// use linkbrief_core::parse::Document;
    /// use url::Url;
    ///
    /// let base = Url::parse("https://example.com/posts/").ok();
    /// let doc = Document::parse_with_preprocessing("<img src='a.png'>", base);
    /// assert_eq!(doc.resolve_url("a.png"), "https://example.com/posts/a.png");
    /// ```
    pub fn parse_with_preprocessing(html: &str, base_url: Option<Url>) -> Self {
        let cleaned = preprocess_html(html, &PreprocessConfig::default());
        Self { html: Html::parse_document(&cleaned), base_url }
    }

    /// Selects elements using a CSS selector, in document order.
    ///
    /// An invalid selector matches nothing.
    pub fn select(&self, selector: &str) -> Vec<Element<'_>> {
        compile_selector(selector)
            .map(|sel| self.html.select(&sel).map(Element::new).collect())
            .unwrap_or_default()
    }

    /// Counts elements matching a CSS selector.
    pub fn count(&self, selector: &str) -> usize {
        compile_selector(selector)
            .map(|sel| self.html.select(&sel).count())
            .unwrap_or(0)
    }

    /// Gets the text of the first `<title>` element, if present.
    pub fn title(&self) -> Option<String> {
        self.select("title").first().map(Element::text)
    }

    /// Every text node on the page, outside script and style.
    pub fn text_fragments(&self) -> Vec<&str> {
        Element::new(self.html.root_element()).text_fragments_skipping(NON_TEXT_TAGS)
    }

    /// Resolves a possibly relative link against the base URL.
    ///
    /// Links that cannot be joined are returned unchanged.
    pub fn resolve_url(&self, raw: &str) -> String {
        self.base_url
            .as_ref()
            .and_then(|base| base.join(raw).ok())
            .map(|url| url.to_string())
            .unwrap_or_else(|| raw.to_string())
    }
}

/// A wrapper around scraper's ElementRef with script-aware text access.
#[derive(Clone, Copy, Debug)]
pub struct Element<'a> {
    element: ElementRef<'a>,
}

impl<'a> Element<'a> {
    fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    /// Gets the lowercase tag name of this element.
    pub fn tag_name(&self) -> &'a str {
        self.element.value().name()
    }

    /// Gets the value of an attribute.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Selects descendant elements using a CSS selector.
    pub fn select(&self, selector: &str) -> Vec<Element<'a>> {
        compile_selector(selector)
            .map(|sel| self.element.select(&sel).map(Element::new).collect())
            .unwrap_or_default()
    }

    /// Descendant text nodes in document order, skipping script and style.
    pub fn text_fragments(&self) -> Vec<&'a str> {
        self.text_fragments_skipping(NON_TEXT_TAGS)
    }

    /// Descendant text nodes in document order, skipping every subtree rooted
    /// at one of `skip` (the element itself included).
    pub fn text_fragments_skipping(&self, skip: &[&str]) -> Vec<&'a str> {
        let mut fragments = Vec::new();
        let mut stack = vec![*self.element];

        while let Some(node) = stack.pop() {
            match node.value() {
                Node::Text(text) => fragments.push(&**text),
                Node::Element(el) if skip.contains(&el.name()) => {}
                _ => stack.extend(node.children().rev()),
            }
        }

        fragments
    }

    /// Text content with fragments concatenated as-is, then normalized.
    pub fn text(&self) -> String {
        normalize_text(&self.text_fragments().concat())
    }

    /// Text content with fragments joined by spaces, then normalized.
    pub fn spaced_text(&self) -> String {
        normalize_text(&self.text_fragments().join(" "))
    }

    /// The element's own child text nodes, in order.
    ///
    /// Text inside child elements (links, emphasis) is not included, and each
    /// node stays a separate fragment.
    pub fn direct_text_fragments(&self) -> Vec<&'a str> {
        self.element
            .children()
            .filter_map(|child| match child.value() {
                Node::Text(text) => Some(&**text),
                _ => None,
            })
            .collect()
    }

    /// Whether `other` is a strict ancestor of this element.
    pub fn is_inside(&self, other: &Element<'_>) -> bool {
        self.element.ancestors().any(|node| node.id() == (*other.element).id())
    }
}
