//! Background-subtraction object detection.
//!
//! Differences a foreground scene against a reference background, thresholds
//! the difference into a binary mask, traces the external contours of the
//! mask and reports one axis-aligned bounding box per contour, drawn as a
//! red overlay on the foreground.

use image::{DynamicImage, GrayImage, Rgb, RgbImage};
use imageproc::contours::{find_contours, BorderType};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use serde::{Deserialize, Serialize};

use crate::error::{PixelopsError, Result};

/// Default binary threshold on the absolute difference.
pub const DEFAULT_THRESHOLD: u8 = 30;

/// Overlay rectangle color (red) and line thickness.
const BOX_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const BOX_THICKNESS: i32 = 2;

/// Axis-aligned bounding box of one detected object, in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Output of [`detect_objects`].
#[derive(Debug, Clone)]
pub struct Detection {
    /// Thresholded absolute difference (0 or 255 per pixel).
    pub mask: GrayImage,
    /// One box per external contour of the mask.
    pub boxes: Vec<BoundingBox>,
    /// Foreground image with the boxes drawn on it.
    pub overlay: RgbImage,
}

/// Per-pixel absolute difference of two same-sized grayscale images.
pub fn abs_diff(a: &GrayImage, b: &GrayImage) -> Result<GrayImage> {
    if a.dimensions() != b.dimensions() {
        return Err(PixelopsError::DimensionMismatch {
            left_width: a.width(),
            left_height: a.height(),
            right_width: b.width(),
            right_height: b.height(),
        });
    }
    let mut out = a.clone();
    for (dst, pb) in out.pixels_mut().zip(b.pixels()) {
        dst.0[0] = dst.0[0].abs_diff(pb.0[0]);
    }
    Ok(out)
}

/// Binary threshold: `v > threshold` maps to 255, everything else to 0.
pub fn threshold_binary(img: &GrayImage, threshold: u8) -> GrayImage {
    let mut out = img.clone();
    for p in out.pixels_mut() {
        p.0[0] = if p.0[0] > threshold { 255 } else { 0 };
    }
    out
}

/// Detect foreground objects by background subtraction.
///
/// Errors with [`PixelopsError::DimensionMismatch`] when the two inputs
/// differ in size. Identical inputs produce an all-zero mask and no boxes.
pub fn detect_objects(
    background: &GrayImage,
    foreground: &GrayImage,
    threshold: u8,
) -> Result<Detection> {
    let diff = abs_diff(foreground, background)?;
    let mask = threshold_binary(&diff, threshold);
    let boxes = bounding_boxes(&mask);
    tracing::debug!("{} object(s) above threshold {}", boxes.len(), threshold);

    let mut overlay = DynamicImage::ImageLuma8(foreground.clone()).to_rgb8();
    for b in &boxes {
        draw_box(&mut overlay, b);
    }

    Ok(Detection {
        mask,
        boxes,
        overlay,
    })
}

/// Bounding boxes of the external contours of a binary mask.
pub fn bounding_boxes(mask: &GrayImage) -> Vec<BoundingBox> {
    find_contours::<i32>(mask)
        .iter()
        .filter(|c| c.border_type == BorderType::Outer)
        .filter_map(|c| {
            let xs = c.points.iter().map(|p| p.x);
            let ys = c.points.iter().map(|p| p.y);
            let (min_x, max_x) = (xs.clone().min()?, xs.max()?);
            let (min_y, max_y) = (ys.clone().min()?, ys.max()?);
            Some(BoundingBox {
                x: min_x as u32,
                y: min_y as u32,
                width: (max_x - min_x + 1) as u32,
                height: (max_y - min_y + 1) as u32,
            })
        })
        .collect()
}

fn draw_box(canvas: &mut RgbImage, b: &BoundingBox) {
    // Thickness is drawn outward; out-of-bounds edges are clipped by the
    // drawing routine.
    for t in 0..BOX_THICKNESS {
        let rect = Rect::at(b.x as i32 - t, b.y as i32 - t)
            .of_size(b.width + 2 * t as u32, b.height + 2 * t as u32);
        draw_hollow_rect_mut(canvas, rect, BOX_COLOR);
    }
}
