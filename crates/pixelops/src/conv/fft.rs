//! 2-D FFT helpers over `rustfft`.
//!
//! A 2-D transform is a row pass followed by a column pass. Plans are built
//! once per grid size and reused for the forward and inverse directions;
//! the inverse pass applies the `1 / (w * h)` normalization that `rustfft`
//! leaves to the caller.

use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

/// Forward and inverse 2-D FFT plans for one fixed grid size.
pub(crate) struct Fft2d {
    width: usize,
    height: usize,
    row_fwd: Arc<dyn Fft<f32>>,
    row_inv: Arc<dyn Fft<f32>>,
    col_fwd: Arc<dyn Fft<f32>>,
    col_inv: Arc<dyn Fft<f32>>,
}

impl Fft2d {
    pub fn new(width: usize, height: usize) -> Self {
        let mut planner = FftPlanner::new();
        Self {
            width,
            height,
            row_fwd: planner.plan_fft_forward(width),
            row_inv: planner.plan_fft_inverse(width),
            col_fwd: planner.plan_fft_forward(height),
            col_inv: planner.plan_fft_inverse(height),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// In-place forward transform of a row-major `width * height` grid.
    pub fn forward(&self, grid: &mut [Complex<f32>]) {
        self.transform(grid, &self.row_fwd, &self.col_fwd);
    }

    /// In-place inverse transform, normalized by `1 / (width * height)`.
    pub fn inverse(&self, grid: &mut [Complex<f32>]) {
        self.transform(grid, &self.row_inv, &self.col_inv);
        let scale = 1.0 / (self.width * self.height) as f32;
        for v in grid.iter_mut() {
            *v *= scale;
        }
    }

    fn transform(&self, grid: &mut [Complex<f32>], row: &Arc<dyn Fft<f32>>, col: &Arc<dyn Fft<f32>>) {
        debug_assert_eq!(grid.len(), self.width * self.height);

        for r in grid.chunks_exact_mut(self.width) {
            row.process(r);
        }

        let mut column = vec![Complex::new(0.0, 0.0); self.height];
        for x in 0..self.width {
            for y in 0..self.height {
                column[y] = grid[y * self.width + x];
            }
            col.process(&mut column);
            for y in 0..self.height {
                grid[y * self.width + x] = column[y];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn forward_then_inverse_is_identity() {
        let (w, h) = (8, 6);
        let fft = Fft2d::new(w, h);
        let original: Vec<Complex<f32>> = (0..w * h)
            .map(|i| Complex::new((i % 13) as f32, 0.0))
            .collect();
        let mut grid = original.clone();
        fft.forward(&mut grid);
        fft.inverse(&mut grid);
        for (got, want) in grid.iter().zip(&original) {
            assert_abs_diff_eq!(got.re, want.re, epsilon = 1e-4);
            assert_abs_diff_eq!(got.im, 0.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn impulse_has_flat_spectrum() {
        let (w, h) = (4, 4);
        let fft = Fft2d::new(w, h);
        let mut grid = vec![Complex::new(0.0, 0.0); w * h];
        grid[0] = Complex::new(1.0, 0.0);
        fft.forward(&mut grid);
        for v in &grid {
            assert_abs_diff_eq!(v.norm(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn dc_bin_is_the_grid_sum() {
        let (w, h) = (5, 3);
        let fft = Fft2d::new(w, h);
        let mut grid = vec![Complex::new(2.0, 0.0); w * h];
        fft.forward(&mut grid);
        assert_abs_diff_eq!(grid[0].re, 2.0 * (w * h) as f32, epsilon = 1e-3);
    }
}
