//! Grayscale level quantization ("clustering" of gray tones).

use image::GrayImage;

/// Width of one quantization band.
pub const LEVEL_STEP: u8 = 4;

/// Quantize gray levels into bands of [`LEVEL_STEP`]: `out = (v / 4) * 4`.
///
/// Integer division floors, so every band maps onto its lowest member and
/// the operation is idempotent.
pub fn quantize_levels(img: &GrayImage) -> GrayImage {
    let mut out = img.clone();
    for p in out.pixels_mut() {
        p.0[0] = (p.0[0] / LEVEL_STEP) * LEVEL_STEP;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::gradient_image;

    #[test]
    fn matches_band_formula() {
        let img = gradient_image(32, 32);
        let q = quantize_levels(&img);
        for (src, dst) in img.pixels().zip(q.pixels()) {
            assert_eq!(dst.0[0], (src.0[0] / 4) * 4);
        }
    }

    #[test]
    fn idempotent() {
        let img = gradient_image(16, 16);
        let once = quantize_levels(&img);
        let twice = quantize_levels(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn extremes_map_into_their_band() {
        let mut img = GrayImage::new(2, 1);
        img.put_pixel(0, 0, image::Luma([255]));
        img.put_pixel(1, 0, image::Luma([3]));
        let q = quantize_levels(&img);
        assert_eq!(q.get_pixel(0, 0).0[0], 252);
        assert_eq!(q.get_pixel(1, 0).0[0], 0);
    }
}
