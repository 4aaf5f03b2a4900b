//! Pixel-space bounding box.

/// Tightest rectangle enclosing non-background pixels on a page.
///
/// Coordinates are in pixels; `right` and `bottom` are exclusive, so
/// `width == right - left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    /// Create a bounding box. `right`/`bottom` are exclusive.
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        debug_assert!(left <= right && top <= bottom);
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}
