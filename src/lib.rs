//! # snapcode
//!
//! Convert source code listings into syntax-highlighted, auto-cropped
//! raster images.
//!
//! The pipeline tokenizes each source line into display categories,
//! composes a self-contained styled document, hands it to a rendering
//! backend that produces one image per page, then trims every page to
//! its visible content and re-pads it with the theme background.
//!
//! ## Quick Start
//!
//! ```no_run
//! use snapcode::convert_file;
//!
//! fn main() -> snapcode::Result<()> {
//!     // Writes snapshot_0.jpg, snapshot_1.jpg, ... one per page.
//!     let saved = convert_file("script.py")?;
//!     println!("saved {} image(s)", saved.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Heuristic highlighting**: word-level keyword/operator/number
//!   classification with an embedded, overridable keyword set
//! - **Auto-crop**: rendered pages are trimmed to content and re-padded
//! - **Swappable backend**: the document-to-pixels step sits behind the
//!   [`RenderBackend`] trait
//! - **Typed errors**: every failure surfaces as a [`Error`] value;
//!   nothing is printed from the library

pub mod convert;
pub mod error;
pub mod highlight;
pub mod model;
pub mod raster;
pub mod render;

// Re-export commonly used types
pub use convert::{ConvertOptions, Converter, DEFAULT_OUTPUT_NAME};
pub use error::{Error, Result};
pub use highlight::{tokenize_line, tokenize_source, HighlightOptions, PYTHON_KEYWORDS};
pub use model::{Category, Document, Line, Theme, ThemeOverrides, Token};
pub use raster::{autocrop, content_bounding_box, BoundingBox};
pub use render::{compose, RenderBackend, StyledDocument, WkhtmltopdfBackend};

use std::path::{Path, PathBuf};

/// Convert a source file with default options.
///
/// Output images land in the current directory as
/// `snapshot_{page}.jpg`.
///
/// # Example
///
/// ```no_run
/// use snapcode::convert_file;
///
/// let saved = convert_file("script.py").unwrap();
/// assert!(saved[0].ends_with("snapshot_0.jpg"));
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<Vec<PathBuf>> {
    Converter::new().convert(path.as_ref(), DEFAULT_OUTPUT_NAME)
}

/// Convert a source file with custom options and output name.
///
/// # Example
///
/// ```no_run
/// use snapcode::{convert_file_with_options, ConvertOptions};
///
/// let options = ConvertOptions::new().with_font_size("16px");
/// let saved = convert_file_with_options("script.py", "shot", options).unwrap();
/// ```
pub fn convert_file_with_options<P: AsRef<Path>>(
    path: P,
    output_name: &str,
    options: ConvertOptions,
) -> Result<Vec<PathBuf>> {
    Converter::with_options(options).convert(path.as_ref(), output_name)
}

/// Builder for configuring and running conversions.
///
/// # Example
///
/// ```no_run
/// use snapcode::{SnapCode, ThemeOverrides};
///
/// let saved = SnapCode::new()
///     .with_theme_overrides(ThemeOverrides {
///         bg: Some("#000000".to_string()),
///         ..Default::default()
///     })
///     .with_font_size("16px")
///     .convert("script.py", "shot")?;
/// # Ok::<(), snapcode::Error>(())
/// ```
pub struct SnapCode {
    options: ConvertOptions,
    toolchain: WkhtmltopdfBackend,
    backend: Option<Box<dyn RenderBackend>>,
}

impl SnapCode {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
            toolchain: WkhtmltopdfBackend::new(),
            backend: None,
        }
    }

    /// Replace the whole theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.options.theme = theme;
        self
    }

    /// Merge theme overrides onto the current theme.
    pub fn with_theme_overrides(mut self, overrides: ThemeOverrides) -> Self {
        self.options.theme.apply(overrides);
        self
    }

    /// Set the CSS font size (e.g. `"16px"`).
    pub fn with_font_size(mut self, font_size: impl Into<String>) -> Self {
        self.options.theme.font_size = font_size.into();
        self
    }

    /// Replace the keyword set.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.highlight = self.options.highlight.with_keywords(keywords);
        self
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.output_dir = dir.into();
        self
    }

    /// Point the default backend at a poppler `bin` directory.
    pub fn with_poppler_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.toolchain = self.toolchain.with_poppler_path(path);
        self
    }

    /// Point the default backend at a wkhtmltopdf executable.
    pub fn with_wkhtmltopdf_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.toolchain = self.toolchain.with_wkhtmltopdf_path(path);
        self
    }

    /// Replace the rendering backend entirely.
    pub fn with_backend(mut self, backend: Box<dyn RenderBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Run the conversion.
    pub fn convert<P: AsRef<Path>>(self, path: P, output_name: &str) -> Result<Vec<PathBuf>> {
        let Self {
            options,
            toolchain,
            backend,
        } = self;
        let backend = backend.unwrap_or_else(|| Box::new(toolchain));
        Converter::with_options(options)
            .with_backend(backend)
            .convert(path.as_ref(), output_name)
    }
}

impl Default for SnapCode {
    fn default() -> Self {
        Self::new()
    }
}
