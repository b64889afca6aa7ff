//! Frequency-domain convolution via the convolution theorem.

use image::GrayImage;
use rustfft::num_complex::Complex;

use super::fft::Fft2d;
use super::{spatial, Kernel};

/// Padded transform size for linear convolution: `dim + kernel_size − 1`
/// per axis. Padding to the full linear-convolution extent avoids
/// circular-convolution wraparound.
pub fn padded_dims(image_dims: (u32, u32), kernel_size: u32) -> (u32, u32) {
    (
        image_dims.0 + kernel_size - 1,
        image_dims.1 + kernel_size - 1,
    )
}

/// Frequency-domain convolver with FFT plans prepared for one image/kernel
/// size combination.
///
/// Plan construction is separated from [`convolve`](Self::convolve) so the
/// benchmark can exclude it from the timed region; plans are reusable
/// across calls on same-sized inputs.
pub struct FrequencyConvolver {
    fft: Fft2d,
}

impl FrequencyConvolver {
    pub fn new(image_dims: (u32, u32), kernel_size: u32) -> Self {
        let (pw, ph) = padded_dims(image_dims, kernel_size);
        Self {
            fft: Fft2d::new(pw as usize, ph as usize),
        }
    }

    /// Convolve `img` with `kernel` in the frequency domain.
    ///
    /// Zero-pads both operands to the padded extent, transforms both,
    /// multiplies element-wise, inverse-transforms, takes the magnitude,
    /// crops to the original dimensions anchored at the origin and rounds
    /// to `u8`. The origin anchor keeps the leading `(k − 1) / 2` transient,
    /// so the output is shifted by that amount relative to a centered
    /// spatial filter.
    ///
    /// # Panics
    /// Panics if the operand sizes do not match the plans held by `self`.
    pub fn convolve(&self, img: &GrayImage, kernel: &Kernel) -> GrayImage {
        let (w, h) = img.dimensions();
        let (pw, ph) = (self.fft.width(), self.fft.height());
        assert_eq!(
            padded_dims((w, h), kernel.size()),
            (pw as u32, ph as u32),
            "operand sizes must match the planned transform size"
        );

        let mut img_grid = vec![Complex::new(0.0, 0.0); pw * ph];
        for y in 0..h as usize {
            for x in 0..w as usize {
                img_grid[y * pw + x] = Complex::new(img.get_pixel(x as u32, y as u32).0[0] as f32, 0.0);
            }
        }

        let mut ker_grid = vec![Complex::new(0.0, 0.0); pw * ph];
        for ky in 0..kernel.size() {
            for kx in 0..kernel.size() {
                ker_grid[ky as usize * pw + kx as usize] = Complex::new(kernel.weight(kx, ky), 0.0);
            }
        }

        self.fft.forward(&mut img_grid);
        self.fft.forward(&mut ker_grid);
        for (a, b) in img_grid.iter_mut().zip(&ker_grid) {
            *a *= *b;
        }
        self.fft.inverse(&mut img_grid);

        let mut out = GrayImage::new(w, h);
        for y in 0..h as usize {
            for x in 0..w as usize {
                let mag = img_grid[y * pw + x].norm();
                out.put_pixel(x as u32, y as u32, image::Luma([spatial::quantize(mag)]));
            }
        }
        out
    }
}

/// One-shot convenience wrapper: plan, convolve, discard the plans.
pub fn convolve(img: &GrayImage, kernel: &Kernel) -> GrayImage {
    FrequencyConvolver::new(img.dimensions(), kernel.size()).convolve(img, kernel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{blob_image, constant_image};

    #[test]
    fn padded_dims_follow_linear_convolution_size() {
        assert_eq!(padded_dims((256, 256), 15), (270, 270));
        assert_eq!(padded_dims((64, 48), 3), (66, 50));
    }

    #[test]
    fn output_has_input_dimensions() {
        let img = constant_image(40, 28, 90);
        let out = convolve(&img, &Kernel::averaging(5));
        assert_eq!(out.dimensions(), (40, 28));
    }

    #[test]
    fn agrees_with_spatial_path_in_interior() {
        // Smooth scene: a bright blob on a dark background. The frequency
        // result is origin-anchored, i.e. shifted by the kernel radius
        // relative to the centered spatial filter.
        let img = blob_image(96, 96, 40, (30, 36, 28, 24), 210);
        let kernel = Kernel::averaging(15);
        let r = kernel.radius();

        let s = spatial::convolve(&img, &kernel);
        let f = convolve(&img, &kernel);

        for y in r..(96 - r - 1) {
            for x in r..(96 - r - 1) {
                let sv = s.get_pixel(x, y).0[0] as i16;
                let fv = f.get_pixel(x + r, y + r).0[0] as i16;
                assert!(
                    (sv - fv).abs() <= 2,
                    "mismatch at ({x},{y}): spatial {sv} vs frequency {fv}"
                );
            }
        }
    }
}
