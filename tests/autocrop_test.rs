//! Integration tests for the autocrop/pad post-processor.

use image::{Rgb, RgbImage};
use snapcode::raster::{autocrop, content_bounding_box, BoundingBox, CONTENT_PADDING};

const BG: Rgb<u8> = Rgb([0x1e, 0x1e, 0x1e]);
const INK: Rgb<u8> = Rgb([0xd4, 0xd4, 0xd4]);

fn page(width: u32, height: u32, content: (u32, u32, u32, u32)) -> RgbImage {
    let (left, top, right, bottom) = content;
    let mut img = RgbImage::from_pixel(width, height, BG);
    for y in top..bottom {
        for x in left..right {
            img.put_pixel(x, y, INK);
        }
    }
    img
}

#[test]
fn test_all_background_page_unchanged() {
    let img = RgbImage::from_pixel(320, 240, BG);
    let result = autocrop(&img, BG);
    assert_eq!(result, img, "uniform page must pass through pixel-identical");
}

#[test]
fn test_crop_pads_with_background() {
    let img = page(300, 200, (100, 50, 180, 120));
    let result = autocrop(&img, BG);

    assert_eq!(result.width(), 80 + 2 * CONTENT_PADDING);
    assert_eq!(result.height(), 70 + 2 * CONTENT_PADDING);

    // Frame is the theme background, content starts at the pad offset.
    assert_eq!(*result.get_pixel(0, 0), BG);
    assert_eq!(*result.get_pixel(CONTENT_PADDING, CONTENT_PADDING), INK);
}

#[test]
fn test_second_pass_bbox_offset_by_padding() {
    let img = page(300, 200, (100, 50, 180, 120));
    let first = autocrop(&img, BG);

    let second = content_bounding_box(&first).unwrap();
    assert_eq!(
        second,
        BoundingBox::new(
            CONTENT_PADDING,
            CONTENT_PADDING,
            CONTENT_PADDING + 80,
            CONTENT_PADDING + 70
        )
    );

    // Re-cropping is stable.
    assert_eq!(autocrop(&first, BG), first);
}

#[test]
fn test_anti_aliasing_noise_suppressed() {
    // Pixels within the gain/bias threshold of the background do not
    // count as content.
    let mut img = RgbImage::from_pixel(50, 50, BG);
    let near_bg = Rgb([BG.0[0] + 40, BG.0[1] + 40, BG.0[2] + 40]);
    img.put_pixel(25, 25, near_bg);
    assert!(content_bounding_box(&img).is_none());
}

#[test]
fn test_background_sample_from_top_left() {
    // The reference color is the top-left pixel, not the theme color:
    // a page rendered on a different background still crops.
    let white = Rgb([0xff, 0xff, 0xff]);
    let mut img = RgbImage::from_pixel(100, 100, white);
    img.put_pixel(50, 50, Rgb([0, 0, 0]));

    let bbox = content_bounding_box(&img).unwrap();
    assert_eq!(bbox, BoundingBox::new(50, 50, 51, 51));

    let result = autocrop(&img, BG);
    // Padding fill comes from the theme background argument.
    assert_eq!(*result.get_pixel(0, 0), BG);
}
