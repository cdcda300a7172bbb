use serde::{Deserialize, Serialize};

use crate::parse::{Document, Element};

const SAMPLE_ROWS: usize = 3;

/// A compact description of one `<table>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSummary {
    /// Caption text, empty when the table has none.
    pub caption: String,
    /// Every non-empty `th` text in the table.
    pub headers: Vec<String>,
    /// Total `tr` count, header row included.
    pub row_count: usize,
    /// Cell texts of up to three rows after the first.
    pub sample_data: Vec<Vec<String>>,
}

/// Summaries of every table that has headers or data rows.
pub fn extract_table_summaries(doc: &Document) -> Vec<TableSummary> {
    doc.select("table").iter().filter_map(summarize_table).collect()
}

fn summarize_table(table: &Element<'_>) -> Option<TableSummary> {
    let caption = table.select("caption").first().map(Element::text).unwrap_or_default();

    let headers: Vec<String> = table
        .select("th")
        .iter()
        .map(Element::text)
        .filter(|text| !text.is_empty())
        .collect();

    let rows = table.select("tr");
    let sample_data: Vec<Vec<String>> = rows
        .iter()
        .skip(1)
        .take(SAMPLE_ROWS)
        .map(|row| {
            row.select("td")
                .iter()
                .map(Element::text)
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
        })
        .filter(|cells| !cells.is_empty())
        .collect();

    if headers.is_empty() && sample_data.is_empty() {
        return None;
    }

    Some(TableSummary { caption, headers, row_count: rows.len(), sample_data })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_summary() {
        let html = r#"
            <table>
                <caption> Quarterly results </caption>
                <tr><th>Quarter</th><th>Revenue</th></tr>
                <tr><td>Q1</td><td>10</td></tr>
                <tr><td>Q2</td><td>12</td></tr>
                <tr><td>Q3</td><td>9</td></tr>
                <tr><td>Q4</td><td>15</td></tr>
            </table>
        "#;

        let tables = extract_table_summaries(&Document::parse(html));
        assert_eq!(tables.len(), 1);

        let table = &tables[0];
        assert_eq!(table.caption, "Quarterly results");
        assert_eq!(table.headers, vec!["Quarter", "Revenue"]);
        assert_eq!(table.row_count, 5);
        assert_eq!(
            table.sample_data,
            vec![vec!["Q1", "10"], vec!["Q2", "12"], vec!["Q3", "9"]]
        );
    }

    #[test]
    fn test_empty_table_omitted() {
        let html = "<table><tr><td></td></tr><tr><td>  </td></tr></table>";
        assert!(extract_table_summaries(&Document::parse(html)).is_empty());
    }

    #[test]
    fn test_caption_only_table_omitted() {
        let html = "<table><caption>Just a caption</caption></table>";
        assert!(extract_table_summaries(&Document::parse(html)).is_empty());
    }

    #[test]
    fn test_headerless_table_with_rows() {
        let html = "<table><tr><td>skipped first row</td></tr><tr><td>a</td><td>b</td></tr></table>";
        let tables = extract_table_summaries(&Document::parse(html));

        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].caption, "");
        assert!(tables[0].headers.is_empty());
        assert_eq!(tables[0].sample_data, vec![vec!["a", "b"]]);
    }
}
