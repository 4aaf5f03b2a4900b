//! Conversion pipeline: source file to saved page images.
//!
//! Drives the full sequence: tokenize every line, compose the styled
//! document, invoke the rendering backend once, then autocrop and save
//! each returned page in order.

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::highlight::{tokenize_source, HighlightOptions};
use crate::model::Theme;
use crate::raster::autocrop;
use crate::render::{compose, RenderBackend, WkhtmltopdfBackend};

/// Default output filename prefix.
pub const DEFAULT_OUTPUT_NAME: &str = "snapshot";

/// Options for a conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Theme driving all colors and the font size.
    pub theme: Theme,

    /// Tokenizer options (keyword set).
    pub highlight: HighlightOptions,

    /// Directory the output images are written to.
    pub output_dir: PathBuf,
}

impl ConvertOptions {
    /// Create options with the default dark theme and keyword set,
    /// writing into the current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the CSS font size (e.g. `"16px"`).
    pub fn with_font_size(mut self, font_size: impl Into<String>) -> Self {
        self.theme.font_size = font_size.into();
        self
    }

    /// Set tokenizer options.
    pub fn with_highlight(mut self, highlight: HighlightOptions) -> Self {
        self.highlight = highlight;
        self
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            theme: Theme::dark(),
            highlight: HighlightOptions::default(),
            output_dir: PathBuf::from("."),
        }
    }
}

/// Converts source listings into auto-cropped page images.
pub struct Converter {
    options: ConvertOptions,
    backend: Box<dyn RenderBackend>,
}

impl Converter {
    /// Create a converter with default options and the wkhtmltopdf
    /// backend.
    pub fn new() -> Self {
        Self::with_options(ConvertOptions::default())
    }

    /// Create a converter with the given options and the wkhtmltopdf
    /// backend.
    pub fn with_options(options: ConvertOptions) -> Self {
        Self {
            options,
            backend: Box::new(WkhtmltopdfBackend::new()),
        }
    }

    /// Swap the rendering backend.
    pub fn with_backend(mut self, backend: Box<dyn RenderBackend>) -> Self {
        self.backend = backend;
        self
    }

    /// The active options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert a source file into one saved image per rendered page.
    ///
    /// Output files are named `{output_name}_{page_index}.jpg` with a
    /// zero-based page index matching the backend's page order. Returns
    /// the saved paths in that order.
    ///
    /// A missing input path fails with [`Error::InputNotFound`] before
    /// any side effect; no transient resource is created.
    pub fn convert(&self, input: &Path, output_name: &str) -> Result<Vec<PathBuf>> {
        if !input.exists() {
            return Err(Error::InputNotFound(input.to_path_buf()));
        }
        // Resolve the pad fill up front so a bad theme fails before the
        // backend runs.
        let background = self.options.theme.background_rgb()?;

        let source = fs::read_to_string(input)?;
        let document = tokenize_source(&source, self.options.theme.clone(), &self.options.highlight);
        log::debug!(
            "tokenized {} line(s) from {}",
            document.line_count(),
            input.display()
        );

        let styled = compose(&document);
        let pages = self.backend.render_to_pages(&styled)?;
        log::info!(
            "backend '{}' rendered {} page(s)",
            self.backend.name(),
            pages.len()
        );

        // Pages are independent after rendering; post-process in
        // parallel. The indexed collect keeps the backend's page order.
        let processed: Vec<RgbImage> = pages
            .par_iter()
            .map(|page| autocrop(page, background))
            .collect();

        let mut saved = Vec::with_capacity(processed.len());
        for (index, page) in processed.iter().enumerate() {
            let path = self
                .options
                .output_dir
                .join(format!("{output_name}_{index}.jpg"));
            page.save(&path)?;
            log::debug!("saved {}", path.display());
            saved.push(path);
        }
        Ok(saved)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
