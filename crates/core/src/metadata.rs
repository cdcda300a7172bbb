use crate::Document;
use crate::parse::normalize_text;

/// Page-level descriptors read from the document head and images.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    /// Normalized `<title>` text, empty when missing.
    pub title: String,
    /// `<meta name="description">` content, empty when missing.
    pub meta_description: String,
    /// Absolute `og:image` URL.
    pub thumbnail: Option<String>,
    /// Every `img[src]`, absolutized, in document order.
    pub image_urls: Vec<String>,
}

impl Document {
    /// Extract every metadata field at once.
    pub fn extract_metadata(&self) -> Metadata {
        Metadata {
            title: self.extract_title(),
            meta_description: self.get_meta_content("name", "description").unwrap_or_default(),
            thumbnail: self.extract_thumbnail(),
            image_urls: self.extract_image_urls(),
        }
    }

    /// Normalized text of the first `<title>`, or an empty string.
    pub fn extract_title(&self) -> String {
        self.title().map(|t| normalize_text(&t)).unwrap_or_default()
    }

    /// Open Graph image resolved against the base URL.
    pub fn extract_thumbnail(&self) -> Option<String> {
        self.get_meta_content("property", "og:image")
            .filter(|url| !url.trim().is_empty())
            .map(|url| self.resolve_url(url.trim()))
    }

    /// Sources of all images, resolved against the base URL.
    pub fn extract_image_urls(&self) -> Vec<String> {
        self.select("img[src]")
            .iter()
            .filter_map(|img| img.attr("src"))
            .map(str::trim)
            .filter(|src| !src.is_empty())
            .map(|src| self.resolve_url(src))
            .collect()
    }

    /// `content` of the first `<meta>` whose `attr` equals `value`.
    fn get_meta_content(&self, attr: &str, value: &str) -> Option<String> {
        self.select(&format!("meta[{}=\"{}\"]", attr, value))
            .first()
            .and_then(|el| el.attr("content"))
            .map(str::to_string)
    }
}
