//! Extraction thresholds.
//!
//! The defaults reproduce the reference heuristics exactly; changing them
//! changes the output of every extractor that reads them.

/// Configuration for content extraction.
///
/// # Example
///
/// ```rust
/// use linkbrief_core::ExtractConfig;
///
/// let config = ExtractConfig::builder()
///     .max_ai_text_chars(2000)
///     .words_per_minute(250)
///     .build();
/// assert_eq!(config.min_main_content_chars, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// A region must produce more characters than this to win (default: 100).
    pub min_main_content_chars: usize,

    /// Shortest fragment kept by the body fallback (default: 4).
    pub min_fallback_fragment_chars: usize,

    /// Main content budget inside the AI-ready text (default: 4000).
    pub max_ai_text_chars: usize,

    /// Quoted-span matches kept per quote character (default: 5).
    pub quotes_per_style: usize,

    /// Reading speed used for the time estimate (default: 200).
    pub words_per_minute: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            min_main_content_chars: 100,
            min_fallback_fragment_chars: 4,
            max_ai_text_chars: 4000,
            quotes_per_style: 5,
            words_per_minute: 200,
        }
    }
}

impl ExtractConfig {
    /// Creates a new builder for ExtractConfig.
    pub fn builder() -> ExtractConfigBuilder {
        ExtractConfigBuilder::new()
    }
}

/// Builder for ExtractConfig.
pub struct ExtractConfigBuilder {
    config: ExtractConfig,
}

impl ExtractConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: ExtractConfig::default() }
    }

    /// Sets the region length threshold.
    pub fn min_main_content_chars(mut self, value: usize) -> Self {
        self.config.min_main_content_chars = value;
        self
    }

    /// Sets the shortest fallback fragment.
    pub fn min_fallback_fragment_chars(mut self, value: usize) -> Self {
        self.config.min_fallback_fragment_chars = value;
        self
    }

    /// Sets the main content budget of the AI-ready text.
    pub fn max_ai_text_chars(mut self, value: usize) -> Self {
        self.config.max_ai_text_chars = value;
        self
    }

    /// Sets the per-style quote cap.
    pub fn quotes_per_style(mut self, value: usize) -> Self {
        self.config.quotes_per_style = value;
        self
    }

    /// Sets the reading speed. Zero is treated as one word per minute.
    pub fn words_per_minute(mut self, value: usize) -> Self {
        self.config.words_per_minute = value.max(1);
        self
    }

    /// Builds the config.
    pub fn build(self) -> ExtractConfig {
        self.config
    }
}

impl Default for ExtractConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtractConfig::default();
        assert_eq!(config.min_main_content_chars, 100);
        assert_eq!(config.min_fallback_fragment_chars, 4);
        assert_eq!(config.max_ai_text_chars, 4000);
        assert_eq!(config.quotes_per_style, 5);
        assert_eq!(config.words_per_minute, 200);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ExtractConfig::builder().quotes_per_style(2).words_per_minute(0).build();
        assert_eq!(config.quotes_per_style, 2);
        assert_eq!(config.words_per_minute, 1);
        assert_eq!(config.max_ai_text_chars, 4000);
    }
}
