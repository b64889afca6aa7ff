//! pixelops — classic digital image-processing demonstrations.
//!
//! Four independent operations, each a direct mapping onto image-processing
//! primitives:
//!
//! 1. **Quantize** – grayscale level clustering (`(v / 4) * 4` per pixel).
//! 2. **Subtract** – background-subtraction object detection: absolute
//!    difference, binary threshold, external contours, bounding-box overlay.
//! 3. **Sharpen** – high-boost and high-pass spatial filters.
//! 4. **Benchmark** – the same averaging convolution computed in the spatial
//!    domain and in the frequency domain (convolution theorem), with
//!    wall-clock timing of each path.
//!
//! The library is pure: every operation takes and returns in-memory image
//! buffers. File I/O lives in [`io`] and all printing belongs to the CLI.
//!
//! # Examples
//!
//! ```no_run
//! use pixelops::{benchmark, io};
//! use std::path::Path;
//!
//! let img = io::load_gray(Path::new("photo.png"))?;
//! let bench = benchmark::run(&img);
//! println!(
//!     "spatial {:.4} s, frequency {:.4} s",
//!     bench.spatial.elapsed.as_secs_f64(),
//!     bench.frequency.elapsed.as_secs_f64()
//! );
//! # Ok::<(), pixelops::PixelopsError>(())
//! ```

pub mod benchmark;
pub mod conv;
pub mod error;
pub mod io;
pub mod quantize;
pub mod sharpen;
pub mod subtract;

#[cfg(test)]
mod test_utils;

pub use benchmark::{Benchmark, BenchmarkReport, TimedOutput};
pub use conv::Kernel;
pub use error::{PixelopsError, Result};
pub use subtract::{BoundingBox, Detection};
