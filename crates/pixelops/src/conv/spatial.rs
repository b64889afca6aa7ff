//! Direct spatial-domain 2-D correlation.

use image::GrayImage;

use super::Kernel;

/// Correlate `img` with `kernel` in the spatial domain.
///
/// Border policy is replicate: coordinates outside the image clamp to the
/// nearest edge pixel. Accumulation is in `f32`; the result is rounded and
/// clamped to `u8`.
pub fn convolve(img: &GrayImage, kernel: &Kernel) -> GrayImage {
    let (w, h) = img.dimensions();
    let r = kernel.radius() as i64;
    let mut out = GrayImage::new(w, h);

    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0f32;
            for ky in 0..kernel.size() {
                let sy = (y as i64 + ky as i64 - r).clamp(0, h as i64 - 1) as u32;
                for kx in 0..kernel.size() {
                    let sx = (x as i64 + kx as i64 - r).clamp(0, w as i64 - 1) as u32;
                    acc += kernel.weight(kx, ky) * img.get_pixel(sx, sy).0[0] as f32;
                }
            }
            out.put_pixel(x, y, image::Luma([quantize(acc)]));
        }
    }
    out
}

/// Round and clamp an `f32` intensity to `u8`.
pub(crate) fn quantize(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
