//! Strict-bounds cropping.
//!
//! Unlike the clipping behavior of the drawing primitives, a crop
//! request that extends outside the image is rejected outright. The
//! result is a freshly owned, contiguous bitmap so that later
//! operations never reference the parent buffer.

use super::TransformError;
use crate::bitmap::Bitmap;

/// Return the sub-rectangle `[y, y + height) x [x, x + width)`.
///
/// # Errors
///
/// Returns `TransformError::CropOutOfBounds` when `x < 0`, `y < 0`,
/// `x + width > bitmap.width`, or `y + height > bitmap.height`, and
/// `TransformError::EmptyCropRegion` when `width` or `height` is zero.
/// The input is untouched on failure.
pub fn crop(
    bitmap: &Bitmap,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
) -> Result<Bitmap, TransformError> {
    if width == 0 || height == 0 {
        return Err(TransformError::EmptyCropRegion);
    }

    let out_of_bounds = x < 0
        || y < 0
        || x as u64 + width as u64 > bitmap.width as u64
        || y as u64 + height as u64 > bitmap.height as u64;
    if out_of_bounds {
        return Err(TransformError::CropOutOfBounds {
            x,
            y,
            width,
            height,
            image_width: bitmap.width,
            image_height: bitmap.height,
        });
    }

    let (left, top) = (x as u32, y as u32);
    let mut output = Vec::with_capacity((width as usize) * (height as usize) * 3);

    // Rows of the window are contiguous in the source, so copy row slices
    for row in 0..height {
        let start = (((top + row) * bitmap.width + left) * 3) as usize;
        let end = start + (width * 3) as usize;
        output.extend_from_slice(&bitmap.pixels[start..end]);
    }

    Ok(Bitmap::new(width, height, output))
}
