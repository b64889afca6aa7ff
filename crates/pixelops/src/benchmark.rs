//! Spatial-vs-frequency convolution timing.
//!
//! Both paths consume numerically identical image and kernel data so the
//! elapsed times and the (approximately equal) outputs are comparable.
//! Timing covers the convolution work only, never image load/save.

use image::GrayImage;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::conv::frequency::FrequencyConvolver;
use crate::conv::{spatial, Kernel};

/// Side length of the fixed averaging kernel used by [`run`].
pub const BENCH_KERNEL_SIZE: u32 = 15;

/// One convolution output together with the wall-clock time it took.
#[derive(Debug, Clone)]
pub struct TimedOutput {
    pub image: GrayImage,
    pub elapsed: Duration,
}

/// Results of one benchmark run: the same convolution computed both ways.
#[derive(Debug, Clone)]
pub struct Benchmark {
    pub spatial: TimedOutput,
    pub frequency: TimedOutput,
    kernel_size: u32,
    dims: (u32, u32),
}

impl Benchmark {
    /// Timing summary suitable for serialization.
    pub fn report(&self) -> BenchmarkReport {
        BenchmarkReport {
            width: self.dims.0,
            height: self.dims.1,
            kernel_size: self.kernel_size,
            spatial_secs: self.spatial.elapsed.as_secs_f64(),
            frequency_secs: self.frequency.elapsed.as_secs_f64(),
        }
    }
}

/// Serializable timing summary of a benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub width: u32,
    pub height: u32,
    pub kernel_size: u32,
    pub spatial_secs: f64,
    pub frequency_secs: f64,
}

/// Time one direct spatial convolution.
pub fn run_spatial(image: &GrayImage, kernel: &Kernel) -> TimedOutput {
    let start = Instant::now();
    let out = spatial::convolve(image, kernel);
    TimedOutput {
        elapsed: start.elapsed(),
        image: out,
    }
}

/// Time one frequency-domain convolution.
///
/// FFT plan construction happens before the timer starts; the timed region
/// spans zero-padding, both forward transforms, the element-wise product,
/// the inverse transform, magnitude extraction, origin crop and
/// quantization.
pub fn run_frequency(image: &GrayImage, kernel: &Kernel) -> TimedOutput {
    let convolver = FrequencyConvolver::new(image.dimensions(), kernel.size());
    let start = Instant::now();
    let out = convolver.convolve(image, kernel);
    TimedOutput {
        elapsed: start.elapsed(),
        image: out,
    }
}

/// Run both convolution paths on `image` with the fixed 15×15 averaging
/// kernel.
pub fn run(image: &GrayImage) -> Benchmark {
    let kernel = Kernel::averaging(BENCH_KERNEL_SIZE);
    let dims = image.dimensions();
    tracing::info!(
        "benchmarking {}x{} image, {}x{} averaging kernel",
        dims.0,
        dims.1,
        BENCH_KERNEL_SIZE,
        BENCH_KERNEL_SIZE
    );

    let spatial = run_spatial(image, &kernel);
    tracing::debug!("spatial path: {:.4} s", spatial.elapsed.as_secs_f64());
    let frequency = run_frequency(image, &kernel);
    tracing::debug!("frequency path: {:.4} s", frequency.elapsed.as_secs_f64());

    Benchmark {
        spatial,
        frequency,
        kernel_size: BENCH_KERNEL_SIZE,
        dims,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::blob_image;

    #[test]
    fn outputs_keep_input_dimensions() {
        let img = blob_image(64, 64, 30, (20, 20, 16, 16), 220);
        let bench = run(&img);
        assert_eq!(bench.spatial.image.dimensions(), (64, 64));
        assert_eq!(bench.frequency.image.dimensions(), (64, 64));
    }

    #[test]
    fn report_carries_non_negative_times() {
        let img = blob_image(64, 64, 30, (20, 20, 16, 16), 220);
        let report = run(&img).report();
        assert!(report.spatial_secs >= 0.0);
        assert!(report.frequency_secs >= 0.0);
        assert_eq!((report.width, report.height), (64, 64));
        assert_eq!(report.kernel_size, BENCH_KERNEL_SIZE);
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = BenchmarkReport {
            width: 256,
            height: 256,
            kernel_size: 15,
            spatial_secs: 0.0123,
            frequency_secs: 0.0456,
        };
        let json = serde_json::to_string(&report).unwrap();
        let back: BenchmarkReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }
}
