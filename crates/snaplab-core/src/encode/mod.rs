//! Bitmap export: serialize the working bitmap to PNG or JPEG bytes.
//!
//! The container is selected by the requested file extension; anything
//! other than the two supported formats is rejected before encoding is
//! attempted. The caller is responsible for writing the returned bytes
//! to storage.

mod jpeg;
mod png;

pub use jpeg::encode_jpeg;
pub use png::encode_png;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bitmap::Bitmap;

/// JPEG export quality (1-100). 90 keeps exports suitable for further
/// editing without ballooning file size.
pub const JPEG_EXPORT_QUALITY: u8 = 90;

/// Errors that can occur during export encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The requested extension is not one of the two supported formats.
    #[error("unsupported output format \"{0}\" (expected .png or .jpg)")]
    UnsupportedFormat(String),

    /// Width or height is zero.
    #[error("invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel data length doesn't match the dimensions.
    #[error("invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// The underlying encoder rejected the bitmap.
    #[error("encoding failed: {0}")]
    EncodingFailed(String),
}

/// The supported output container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Png,
    Jpeg,
}

impl OutputFormat {
    /// Select a format from a bare file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Result<Self, EncodeError> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            other => Err(EncodeError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Select a format from the extension of `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EncodeError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| EncodeError::UnsupportedFormat(path.display().to_string()))?;
        Self::from_extension(ext)
    }
}

/// Serialize `bitmap` into the requested container format.
pub fn encode(bitmap: &Bitmap, format: OutputFormat) -> Result<Vec<u8>, EncodeError> {
    match format {
        OutputFormat::Png => encode_png(&bitmap.pixels, bitmap.width, bitmap.height),
        OutputFormat::Jpeg => encode_jpeg(
            &bitmap.pixels,
            bitmap.width,
            bitmap.height,
            JPEG_EXPORT_QUALITY,
        ),
    }
}

/// Shared input validation for both encoders.
fn validate_buffer(pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    Ok(())
}
