//! Rendering backend abstraction.
//!
//! Provides a trait-based interface for the document-to-pixels step,
//! isolating the external rendering toolchain from the tokenizer and
//! autocrop logic.

use image::RgbImage;

use crate::error::Result;

/// Self-contained styled markup produced by the composer.
///
/// Carries no external stylesheet dependency; a backend can render it
/// without network or filesystem context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledDocument(String);

impl StyledDocument {
    /// Wrap composed markup.
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// The markup text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the markup in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the markup is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<StyledDocument> for String {
    fn from(doc: StyledDocument) -> Self {
        doc.0
    }
}

/// Abstract interface for converting a styled document into page images.
///
/// Implementations must return at least one page, render with zero page
/// margins, and must not silently clip content that fits within one
/// page's width/height boundary.
pub trait RenderBackend {
    /// Render the document into one raster image per page, in page order.
    fn render_to_pages(&self, document: &StyledDocument) -> Result<Vec<RgbImage>>;

    /// Name of this backend, for diagnostics.
    fn name(&self) -> &str;
}
