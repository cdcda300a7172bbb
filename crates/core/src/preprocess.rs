//! Noise stripping that runs before a page is parsed.
//!
//! The rewriter drops elements whose text must never reach an extractor.
//! Walkers in [`crate::parse`] still skip script and style subtrees on their
//! own, so a page that slips past this pass (or a caller that parses without
//! it) yields the same text.

/// Configuration for HTML preprocessing
#[derive(Debug, Clone)]
pub struct PreprocessConfig {
    /// Whether to remove script tags
    pub remove_scripts: bool,
    /// Whether to remove style tags
    pub remove_styles: bool,
    /// Whether to remove noscript tags
    pub remove_noscript: bool,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self { remove_scripts: true, remove_styles: true, remove_noscript: true }
    }
}

impl PreprocessConfig {
    fn removed_tags(&self) -> Vec<&'static str> {
        [
            (self.remove_scripts, "script"),
            (self.remove_styles, "style"),
            (self.remove_noscript, "noscript"),
        ]
        .into_iter()
        .filter_map(|(enabled, tag)| enabled.then_some(tag))
        .collect()
    }
}

/// Strip noise elements from raw HTML.
///
/// Rewriting is best effort: when the rewriter rejects the input the original
/// markup is returned untouched and left to the lenient parser.
pub fn preprocess_html(html: &str, config: &PreprocessConfig) -> String {
    let tags = config.removed_tags();
    if tags.is_empty() || html.trim().is_empty() {
        return html.to_string();
    }

    let mut output: Vec<u8> = Vec::with_capacity(html.len());
    let mut rewriter = lol_html::HtmlRewriter::new(
        lol_html::Settings {
            element_content_handlers: tags
                .into_iter()
                .map(|tag| {
                    lol_html::element!(tag, |el| {
                        el.remove();
                        Ok(())
                    })
                })
                .collect(),
            ..Default::default()
        },
        |c: &[u8]| output.extend_from_slice(c),
    );

    if rewriter.write(html.as_bytes()).is_err() {
        tracing::debug!("noise rewriter rejected input, parsing raw markup");
        return html.to_string();
    }

    if rewriter.end().is_err() {
        tracing::debug!("noise rewriter failed to finish, parsing raw markup");
        return html.to_string();
    }

    match String::from_utf8(output) {
        Ok(cleaned) if !cleaned.is_empty() => cleaned,
        _ => html.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_unwanted_tags() {
        let html = r#"
            <html>
            <head>
                <style>body { color: red; }</style>
                <script>var quote = "this should never be mined as a quotation";</script>
            </head>
            <body>
                <p>Visible paragraph</p>
                <noscript>Enable JavaScript</noscript>
            </body>
            </html>
        "#;

        let cleaned = preprocess_html(html, &PreprocessConfig::default());

        assert!(!cleaned.contains("<script"));
        assert!(!cleaned.contains("color: red"));
        assert!(!cleaned.contains("Enable JavaScript"));
        assert!(cleaned.contains("Visible paragraph"));
    }

    #[test]
    fn test_keep_tags_when_disabled() {
        let html = "<body><script>track()</script><p>Text</p></body>";
        let config = PreprocessConfig { remove_scripts: false, ..Default::default() };

        let cleaned = preprocess_html(html, &config);
        assert!(cleaned.contains("track()"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(preprocess_html("", &PreprocessConfig::default()), "");
        assert_eq!(preprocess_html("   ", &PreprocessConfig::default()), "   ");
    }

    #[test]
    fn test_multibyte_text_survives() {
        let html = "<p>Ünïcödé — 日本語のテキスト</p><script>x()</script>";
        let cleaned = preprocess_html(html, &PreprocessConfig::default());
        assert!(cleaned.contains("Ünïcödé — 日本語のテキスト"));
    }
}
