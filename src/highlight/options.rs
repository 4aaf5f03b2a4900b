//! Highlighter options.

use super::keywords::python_keywords;

/// Options controlling tokenization.
#[derive(Debug, Clone)]
pub struct HighlightOptions {
    /// The active keyword set. Defaults to Python's reserved words.
    pub keywords: Vec<String>,
}

impl HighlightOptions {
    /// Create options with the default keyword set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the keyword set entirely.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Add keywords on top of the current set.
    pub fn with_extra_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            keywords: python_keywords(),
        }
    }
}
