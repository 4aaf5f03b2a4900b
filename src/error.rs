//! Error types for the snapcode library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for snapcode operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during code-to-image conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// The source file to convert does not exist.
    #[error("Source file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    /// The external rendering toolchain (wkhtmltopdf / poppler) is
    /// missing or misconfigured.
    #[error("Rendering toolchain unavailable: {0}")]
    RenderingUnavailable(String),

    /// I/O error when reading sources or writing documents and images.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding or encoding a raster image.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// The rendering backend ran but produced unusable output.
    #[error("Rendering error: {0}")]
    Render(String),

    /// A theme color could not be parsed as a hex color value.
    #[error("Invalid color value: {0}")]
    InvalidColor(String),

    /// Theme overrides were malformed or contained unknown keys.
    #[error("Invalid theme configuration: {0}")]
    Theme(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Theme(err.to_string())
    }
}
