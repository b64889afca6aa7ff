//! Image loading and saving with path context on failure.
//!
//! Every operation in this crate works on in-memory buffers; these helpers
//! are the only place the filesystem is touched. Color inputs are converted
//! to 8-bit luma on load, matching the grayscale pipeline downstream.

use image::{GrayImage, RgbImage};
use std::path::Path;

use crate::error::{PixelopsError, Result};

/// Load an image and convert it to 8-bit grayscale.
pub fn load_gray(path: &Path) -> Result<GrayImage> {
    let img = image::open(path).map_err(|source| PixelopsError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_luma8())
}

/// Save a grayscale image; the format is inferred from the extension.
pub fn save_gray(img: &GrayImage, path: &Path) -> Result<()> {
    img.save(path).map_err(|source| PixelopsError::ImageSave {
        path: path.to_path_buf(),
        source,
    })
}

/// Save an RGB image; the format is inferred from the extension.
pub fn save_rgb(img: &RgbImage, path: &Path) -> Result<()> {
    img.save(path).map_err(|source| PixelopsError::ImageSave {
        path: path.to_path_buf(),
        source,
    })
}
