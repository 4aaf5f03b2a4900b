//! Concrete rendering backend: wkhtmltopdf + poppler.
//!
//! Renders the styled document to PDF with `wkhtmltopdf`, then
//! rasterizes each PDF page with poppler's `pdftoppm`. All transient
//! files live in a per-invocation temp directory that is removed on
//! every exit path when it drops.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use image::RgbImage;
use tempfile::TempDir;

use crate::error::{Error, Result};

use super::{RenderBackend, StyledDocument};

/// Backend shelling out to `wkhtmltopdf` and poppler's `pdftoppm`.
#[derive(Debug, Clone, Default)]
pub struct WkhtmltopdfBackend {
    wkhtmltopdf_path: Option<PathBuf>,
    poppler_path: Option<PathBuf>,
    dpi: Option<u32>,
}

impl WkhtmltopdfBackend {
    /// Create a backend that resolves both tools from `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit `wkhtmltopdf` executable.
    pub fn with_wkhtmltopdf_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.wkhtmltopdf_path = Some(path.into());
        self
    }

    /// Use poppler binaries from the given `bin` directory.
    pub fn with_poppler_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.poppler_path = Some(path.into());
        self
    }

    /// Set the rasterization resolution in DPI (default 200).
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = Some(dpi);
        self
    }

    fn wkhtmltopdf_command(&self) -> Command {
        match &self.wkhtmltopdf_path {
            Some(path) => Command::new(path),
            None => Command::new("wkhtmltopdf"),
        }
    }

    fn pdftoppm_command(&self) -> Command {
        match &self.poppler_path {
            Some(dir) => Command::new(dir.join("pdftoppm")),
            None => Command::new("pdftoppm"),
        }
    }

    fn html_to_pdf(&self, html: &Path, pdf: &Path) -> Result<()> {
        let output = self
            .wkhtmltopdf_command()
            .args(["--margin-top", "0", "--margin-right", "0"])
            .args(["--margin-bottom", "0", "--margin-left", "0"])
            .args(["--encoding", "UTF-8", "--quiet"])
            .arg(html)
            .arg(pdf)
            .output()
            .map_err(|e| spawn_error("wkhtmltopdf", e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Render(format!(
                "wkhtmltopdf exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }

    fn pdf_to_images(&self, pdf: &Path, workdir: &Path) -> Result<Vec<RgbImage>> {
        let prefix = workdir.join("page");
        let dpi = self.dpi.unwrap_or(200);

        let output = self
            .pdftoppm_command()
            .arg("-jpeg")
            .args(["-r", &dpi.to_string()])
            .arg(pdf)
            .arg(&prefix)
            .output()
            .map_err(|e| spawn_error("pdftoppm (poppler)", e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Render(format!(
                "pdftoppm exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        // pdftoppm names pages page-1.jpg, page-2.jpg, ... zero-padded
        // uniformly within a run, so a lexical sort restores page order.
        let mut page_files: Vec<PathBuf> = fs::read_dir(workdir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.extension().is_some_and(|ext| ext == "jpg")
                    && path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.starts_with("page-"))
            })
            .collect();
        page_files.sort();

        if page_files.is_empty() {
            return Err(Error::Render("pdftoppm produced no page images".into()));
        }

        let mut pages = Vec::with_capacity(page_files.len());
        for path in &page_files {
            let img = image::open(path)?;
            pages.push(img.to_rgb8());
        }
        log::debug!("rasterized {} page(s) at {} dpi", pages.len(), dpi);
        Ok(pages)
    }
}

impl RenderBackend for WkhtmltopdfBackend {
    fn render_to_pages(&self, document: &StyledDocument) -> Result<Vec<RgbImage>> {
        // Unique directory per invocation; removed when dropped,
        // whichever path this function exits through.
        let workdir = TempDir::new()?;
        let html_path = workdir.path().join("document.html");
        let pdf_path = workdir.path().join("document.pdf");

        fs::write(&html_path, document.as_str())?;
        self.html_to_pdf(&html_path, &pdf_path)?;
        self.pdf_to_images(&pdf_path, workdir.path())
    }

    fn name(&self) -> &str {
        "wkhtmltopdf"
    }
}

fn spawn_error(tool: &str, err: std::io::Error) -> Error {
    if err.kind() == ErrorKind::NotFound {
        Error::RenderingUnavailable(format!(
            "{tool} was not found. Install it and either add it to PATH \
             or point the backend at it explicitly."
        ))
    } else {
        Error::Io(err)
    }
}
