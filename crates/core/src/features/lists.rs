use serde::{Deserialize, Serialize};

use crate::parse::{Document, char_len};

/// Unordered lists inside content-like containers.
const CONTENT_LIST_SELECTOR: &str = "article ul, main ul, .content ul, .post-content ul";

const MIN_ITEM_CHARS: usize = 10;
const MIN_ITEMS: usize = 2;

/// A list worth passing on to the summarizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSummary {
    /// Always `"unordered"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub items: Vec<String>,
}

/// Lists in content regions with at least two items longer than 10 characters.
///
/// Each item is every descendant text node joined by spaces and normalized,
/// so nested list items also appear in their parent list.
pub fn extract_important_lists(doc: &Document) -> Vec<ListSummary> {
    doc.select(CONTENT_LIST_SELECTOR)
        .iter()
        .filter_map(|ul| {
            let items: Vec<String> = ul
                .select("li")
                .iter()
                .map(|li| li.spaced_text())
                .filter(|text| char_len(text) > MIN_ITEM_CHARS)
                .collect();

            (items.len() >= MIN_ITEMS).then(|| ListSummary { kind: "unordered".to_string(), items })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_lists_only() {
        let html = r#"
            <nav><ul><li>Navigation entry one</li><li>Navigation entry two</li></ul></nav>
            <article>
                <ul>
                    <li>First <strong>useful</strong> point</li>
                    <li>tiny</li>
                    <li>Second useful point</li>
                </ul>
            </article>
        "#;

        let lists = extract_important_lists(&Document::parse(html));
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].kind, "unordered");
        assert_eq!(lists[0].items, vec!["First useful point", "Second useful point"]);
    }

    #[test]
    fn test_list_needs_two_items() {
        let html = r#"<main><ul><li>Only one long enough item</li><li>short</li></ul></main>"#;
        assert!(extract_important_lists(&Document::parse(html)).is_empty());
    }

    #[test]
    fn test_list_matched_by_two_containers_once() {
        let html = r#"
            <main><div class="content">
                <ul><li>Shared list item one</li><li>Shared list item two</li></ul>
            </div></main>
        "#;
        assert_eq!(extract_important_lists(&Document::parse(html)).len(), 1);
    }

    #[test]
    fn test_serializes_type_field() {
        let list = ListSummary { kind: "unordered".to_string(), items: vec![] };
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["type"], "unordered");
    }
}
