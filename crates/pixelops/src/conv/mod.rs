//! Convolution engine shared by the sharpening high-pass filter and the
//! spatial-vs-frequency benchmark.
//!
//! Two interchangeable paths over the same [`Kernel`]:
//!
//! - [`spatial`] — direct 2-D correlation with replicate border handling.
//! - [`frequency`] — linear convolution via the convolution theorem
//!   (zero-pad, FFT, element-wise multiply, inverse FFT, origin crop).
//!
//! Every kernel in this crate is symmetric, so correlation and true
//! convolution coincide and the two paths agree up to quantization away
//! from the border.

pub(crate) mod fft;
pub mod frequency;
pub mod spatial;

/// Immutable square grid of `f32` filter weights with odd side length.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    weights: Vec<f32>,
    size: u32,
}

impl Kernel {
    /// Build a kernel from row-major weights.
    ///
    /// # Panics
    /// Panics if `size` is even or zero, or if `weights.len() != size * size`.
    /// Kernels are fixed trusted constants, so this is a programmer error.
    pub fn new(weights: Vec<f32>, size: u32) -> Self {
        assert!(size % 2 == 1, "kernel side must be odd, got {size}");
        assert_eq!(
            weights.len(),
            (size * size) as usize,
            "weight count must match kernel area"
        );
        Self { weights, size }
    }

    /// Uniform averaging kernel: every weight is `1 / (size * size)`.
    pub fn averaging(size: u32) -> Self {
        let n = (size * size) as usize;
        Self::new(vec![1.0 / n as f32; n], size)
    }

    /// 3×3 Laplacian high-pass kernel (center 8, surround −1, zero-sum).
    pub fn laplacian_8() -> Self {
        Self::new(
            vec![-1.0, -1.0, -1.0, -1.0, 8.0, -1.0, -1.0, -1.0, -1.0],
            3,
        )
    }

    /// Side length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Half-width `(size - 1) / 2`, the tap reach on each side of the anchor.
    pub fn radius(&self) -> u32 {
        self.size / 2
    }

    /// Weight at kernel coordinate `(kx, ky)`.
    pub fn weight(&self, kx: u32, ky: u32) -> f32 {
        self.weights[(ky * self.size + kx) as usize]
    }

    /// Row-major weights.
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Sum of all weights (1.0 for averaging kernels, 0.0 for the Laplacian).
    pub fn sum(&self) -> f32 {
        self.weights.iter().sum()
    }
}
