//! Shared synthetic images for unit tests.

use image::{GrayImage, Luma};

/// Uniform image with every pixel set to `value`.
pub(crate) fn constant_image(w: u32, h: u32, value: u8) -> GrayImage {
    GrayImage::from_pixel(w, h, Luma([value]))
}

/// Diagonal linear ramp spanning the full intensity range.
pub(crate) fn gradient_image(w: u32, h: u32) -> GrayImage {
    let mut img = GrayImage::new(w, h);
    let span = (w + h - 2).max(1);
    for y in 0..h {
        for x in 0..w {
            let v = ((x + y) * 255 / span) as u8;
            img.put_pixel(x, y, Luma([v]));
        }
    }
    img
}

/// A `fg`-valued axis-aligned rectangle `(x, y, width, height)` on a `bg`
/// background.
pub(crate) fn blob_image(
    w: u32,
    h: u32,
    bg: u8,
    rect: (u32, u32, u32, u32),
    fg: u8,
) -> GrayImage {
    let (rx, ry, rw, rh) = rect;
    let mut img = constant_image(w, h, bg);
    for y in ry..(ry + rh).min(h) {
        for x in rx..(rx + rw).min(w) {
            img.put_pixel(x, y, Luma([fg]));
        }
    }
    img
}
