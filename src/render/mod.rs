//! Rendering module: markup composition and page rendering backends.

mod backend;
mod html;
mod wkhtmltopdf;

pub use backend::{RenderBackend, StyledDocument};
pub use html::compose;
pub use wkhtmltopdf::WkhtmltopdfBackend;
