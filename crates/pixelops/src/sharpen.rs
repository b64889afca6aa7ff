//! High-boost and high-pass spatial sharpening filters.

use image::{GrayImage, Luma};

use crate::conv::{spatial, Kernel};

/// Default high-boost amplification factor.
pub const DEFAULT_BOOST: f32 = 1.5;

/// Gaussian σ of the 5×5 smoothing stage (what a 5×5 OpenCV Gaussian with
/// automatic sigma computes: `0.3 * ((5 - 1) * 0.5 - 1) + 0.8`).
pub const BLUR_SIGMA: f32 = 1.1;

/// Gaussian-blur a grayscale image through an `f32` plane.
pub fn gaussian_blur(img: &GrayImage, sigma: f32) -> GrayImage {
    let (w, h) = img.dimensions();
    let mut plane = image::ImageBuffer::<Luma<f32>, Vec<f32>>::new(w, h);
    for y in 0..h {
        for x in 0..w {
            plane.put_pixel(x, y, Luma([img.get_pixel(x, y)[0] as f32 / 255.0]));
        }
    }
    let blurred = imageproc::filter::gaussian_blur_f32(&plane, sigma);
    let mut out = GrayImage::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let v = blurred.get_pixel(x, y)[0].clamp(0.0, 1.0);
            out.put_pixel(x, y, Luma([(v * 255.0).round() as u8]));
        }
    }
    out
}

/// Unsharp mask: `img − blurred`, saturating at zero.
pub fn unsharp_mask(img: &GrayImage, blurred: &GrayImage) -> GrayImage {
    let mut out = img.clone();
    for (dst, low) in out.pixels_mut().zip(blurred.pixels()) {
        dst.0[0] = dst.0[0].saturating_sub(low.0[0]);
    }
    out
}

/// High-boost sharpening: `out = amount · img + mask` with
/// `mask = img − blurred`. `amount = 1` reduces to adding the mask back
/// exactly once.
pub fn high_boost(img: &GrayImage, amount: f32) -> GrayImage {
    let blurred = gaussian_blur(img, BLUR_SIGMA);
    let mask = unsharp_mask(img, &blurred);
    let mut out = GrayImage::new(img.width(), img.height());
    for ((dst, src), m) in out.pixels_mut().zip(img.pixels()).zip(mask.pixels()) {
        let v = amount * src.0[0] as f32 + m.0[0] as f32;
        dst.0[0] = v.round().clamp(0.0, 255.0) as u8;
    }
    out
}

/// High-pass filter: 3×3 Laplacian through the spatial convolution engine.
pub fn high_pass(img: &GrayImage) -> GrayImage {
    spatial::convolve(img, &Kernel::laplacian_8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{blob_image, constant_image};

    #[test]
    fn high_pass_of_constant_image_is_zero() {
        let img = constant_image(20, 20, 128);
        let out = high_pass(&img);
        assert!(out.pixels().all(|p| p.0[0] == 0));
    }

    #[test]
    fn high_pass_responds_at_edges() {
        let img = blob_image(32, 32, 30, (10, 10, 12, 12), 200);
        let out = high_pass(&img);
        // Interior of both flat regions stays dark, the boundary lights up.
        assert_eq!(out.get_pixel(2, 2).0[0], 0);
        assert_eq!(out.get_pixel(15, 15).0[0], 0);
        assert!(out.get_pixel(10, 10).0[0] > 0);
    }

    #[test]
    fn unit_boost_is_original_plus_mask() {
        // Mid-gray blob keeps every pixel away from saturation.
        let img = blob_image(24, 24, 100, (8, 8, 8, 8), 160);
        let blurred = gaussian_blur(&img, BLUR_SIGMA);
        let mask = unsharp_mask(&img, &blurred);
        let boosted = high_boost(&img, 1.0);
        for ((b, src), m) in boosted.pixels().zip(img.pixels()).zip(mask.pixels()) {
            assert_eq!(b.0[0], src.0[0].saturating_add(m.0[0]));
        }
    }

    #[test]
    fn boost_amplifies_relative_to_unit_gain() {
        let img = blob_image(24, 24, 80, (8, 8, 8, 8), 150);
        let unit = high_boost(&img, 1.0);
        let boosted = high_boost(&img, DEFAULT_BOOST);
        // Boosting scales the original term up, so no pixel gets darker.
        for (b, u) in boosted.pixels().zip(unit.pixels()) {
            assert!(b.0[0] >= u.0[0]);
        }
    }
}
