use serde::{Deserialize, Serialize};

use crate::parse::Document;

/// One entry of the headings hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level, 1 through 6.
    pub level: u8,
    pub text: String,
    /// Index of this heading among all `h1`-`h6` elements in document order.
    ///
    /// Not serialized; deserialized headings all get 0, which leaves them in
    /// their grouped order.
    #[serde(skip)]
    pub position: usize,
}

/// Collect non-empty headings grouped by level.
///
/// All `h1` come first, then all `h2`, and so on; within a level the order is
/// document order. Use [`Heading::position`] to recover the visual order.
pub fn extract_headings(doc: &Document) -> Vec<Heading> {
    let all = doc.select("h1, h2, h3, h4, h5, h6");

    let mut headings = Vec::new();
    for level in 1..=6u8 {
        let tag = format!("h{}", level);
        for (position, el) in all.iter().enumerate() {
            if el.tag_name() != tag {
                continue;
            }
            let text = el.text();
            if !text.is_empty() {
                headings.push(Heading { level, text, position });
            }
        }
    }

    headings
}

/// The first `n` headings in document order.
pub fn first_in_document_order(headings: &[Heading], n: usize) -> Vec<&Heading> {
    let mut ordered: Vec<&Heading> = headings.iter().collect();
    ordered.sort_by_key(|h| h.position);
    ordered.truncate(n);
    ordered
}
