//! Autocrop/pad post-processing for rendered pages.
//!
//! Trims a page image to its visible content and re-pads it with the
//! theme background. Operates on in-memory images only; it performs no
//! I/O. Zero-size input is a caller precondition violation.

use image::imageops;
use image::{Rgb, RgbImage};

use super::BoundingBox;

/// Padding added around the cropped content on each side, in pixels.
pub const CONTENT_PADDING: u32 = 20;

/// Gain applied to the per-channel difference before thresholding.
const DIFF_GAIN: i32 = 2;

/// Bias subtracted after the gain; differences at or below
/// `BIAS / GAIN` (anti-aliasing noise near the background) zero out.
const DIFF_BIAS: i32 = 100;

/// Compute the bounding box of visible content on a page.
///
/// The pixel at the top-left corner is sampled as the assumed
/// background color; a pixel counts as content when any channel of its
/// gain/bias-transformed difference from that sample is non-zero.
/// Returns `None` when the page is entirely background.
///
/// If visible content touches the exact top-left corner the sample is
/// wrong and the box becomes unreliable. Known limitation; no corner
/// heuristics are applied.
pub fn content_bounding_box(img: &RgbImage) -> Option<BoundingBox> {
    if img.width() == 0 || img.height() == 0 {
        return None;
    }
    let reference = *img.get_pixel(0, 0);

    let mut left = u32::MAX;
    let mut top = u32::MAX;
    let mut right = 0u32;
    let mut bottom = 0u32;
    let mut found = false;

    for (x, y, pixel) in img.enumerate_pixels() {
        if !differs(pixel, &reference) {
            continue;
        }
        found = true;
        left = left.min(x);
        top = top.min(y);
        right = right.max(x);
        bottom = bottom.max(y);
    }

    found.then(|| BoundingBox::new(left, top, right + 1, bottom + 1))
}

/// Gain/bias transform on the absolute channel difference: any channel
/// with `diff * 2 - 100 > 0` marks the pixel as content.
fn differs(pixel: &Rgb<u8>, reference: &Rgb<u8>) -> bool {
    pixel.0.iter().zip(reference.0.iter()).any(|(&a, &b)| {
        let diff = i32::from(a.abs_diff(b));
        diff * DIFF_GAIN - DIFF_BIAS > 0
    })
}

/// Trim a page to its visible content and re-pad with the background.
///
/// Crops the source to the content bounding box, then pastes the crop
/// at `(20, 20)` into a new image sized `(box_width + 40, box_height +
/// 40)` filled with `background`. A page with no detected content is
/// returned unchanged.
pub fn autocrop(img: &RgbImage, background: Rgb<u8>) -> RgbImage {
    let Some(bbox) = content_bounding_box(img) else {
        log::debug!("page is entirely background, skipping crop");
        return img.clone();
    };
    log::debug!(
        "content box {}x{} at ({}, {})",
        bbox.width(),
        bbox.height(),
        bbox.left,
        bbox.top
    );

    let cropped = imageops::crop_imm(img, bbox.left, bbox.top, bbox.width(), bbox.height());
    let mut padded = RgbImage::from_pixel(
        bbox.width() + 2 * CONTENT_PADDING,
        bbox.height() + 2 * CONTENT_PADDING,
        background,
    );
    imageops::replace(
        &mut padded,
        &cropped.to_image(),
        i64::from(CONTENT_PADDING),
        i64::from(CONTENT_PADDING),
    );
    padded
}
