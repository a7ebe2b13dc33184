//! File-based image source: reads raw bytes and decodes them as PNG or
//! JPEG.
//!
//! Any other detected container format is rejected before decoding is
//! attempted. JPEG files carrying an EXIF orientation tag are
//! normalized so the returned bitmap is upright.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageFormat, ImageReader};
use thiserror::Error;

use crate::bitmap::Bitmap;

/// Errors from reading and decoding an image file.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes are not a supported image encoding (PNG or JPEG).
    #[error("unsupported image format (expected PNG or JPEG)")]
    UnsupportedFormat,

    /// The container was recognized but the data is malformed.
    #[error("corrupted or incomplete image data: {0}")]
    Corrupted(String),

    /// The path could not be read.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for DecodeError {
    fn from(err: std::io::Error) -> Self {
        DecodeError::Io(err.to_string())
    }
}

/// Read the file at `path` and decode it as a color image.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Bitmap, DecodeError> {
    let bytes = fs::read(path.as_ref())?;
    decode(&bytes)
}

/// Decode PNG or JPEG bytes into a bitmap.
///
/// # Errors
///
/// Returns `DecodeError::UnsupportedFormat` if the bytes are not a PNG
/// or JPEG container, and `DecodeError::Corrupted` if the container is
/// recognized but cannot be decoded.
pub fn decode(bytes: &[u8]) -> Result<Bitmap, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::Io(e.to_string()))?;

    match reader.format() {
        Some(ImageFormat::Png | ImageFormat::Jpeg) => {}
        _ => return Err(DecodeError::UnsupportedFormat),
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::Corrupted(e.to_string()))?;

    let img = apply_orientation(img, extract_orientation(bytes));
    Ok(Bitmap::from_rgb_image(img.into_rgb8()))
}

/// Extract the EXIF orientation value (1-8) from the raw file bytes.
///
/// Returns 1 (upright) when there is no EXIF segment or no orientation
/// tag, which is the common case for PNG and camera-less JPEG.
fn extract_orientation(bytes: &[u8]) -> u32 {
    let mut cursor = Cursor::new(bytes);
    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .unwrap_or(1),
        Err(_) => 1,
    }
}

/// Undo the EXIF orientation so pixel (0, 0) is the visual top-left.
fn apply_orientation(img: DynamicImage, orientation: u32) -> DynamicImage {
    match orientation {
        2 => img.fliph(),
        3 => img.rotate180(),
        4 => img.flipv(),
        5 => img.rotate90().fliph(),
        6 => img.rotate90(),
        7 => img.rotate270().fliph(),
        8 => img.rotate270(),
        // 1 is upright; out-of-range values are treated as upright
        _ => img,
    }
}
