//! Raster post-processing for rendered pages.

mod autocrop;
mod bbox;

pub use autocrop::{autocrop, content_bounding_box, CONTENT_PADDING};
pub use bbox::BoundingBox;
