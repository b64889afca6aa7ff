//! Error types for pixelops operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pixelops operations.
pub type Result<T> = std::result::Result<T, PixelopsError>;

/// Errors raised by the image-processing operations.
#[derive(Debug, Error)]
pub enum PixelopsError {
    /// Input path did not resolve to a decodable image.
    #[error("failed to load image {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Output image could not be encoded or written.
    #[error("failed to save image {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Two-image operation received inputs of different sizes.
    #[error("image dimensions differ: {left_width}x{left_height} vs {right_width}x{right_height}")]
    DimensionMismatch {
        left_width: u32,
        left_height: u32,
        right_width: u32,
        right_height: u32,
    },
}
