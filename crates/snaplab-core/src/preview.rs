//! Preview scaling for the display collaborator.
//!
//! The display renders the working bitmap scaled to fit a fixed area
//! while preserving aspect ratio. Bitmaps already inside the area are
//! shown at native size; nothing is ever upscaled.

use image::imageops::{self, FilterType};

use crate::bitmap::Bitmap;

/// Dimensions that fit `width x height` inside `max_width x max_height`
/// preserving aspect ratio. Never returns zero; a zero display box is
/// treated as 1x1.
pub fn fit_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    let max_width = max_width.max(1);
    let max_height = max_height.max(1);

    if width <= max_width && height <= max_height {
        return (width.max(1), height.max(1));
    }

    let scale = f64::min(
        max_width as f64 / width as f64,
        max_height as f64 / height as f64,
    );

    let new_width = ((width as f64 * scale).round() as u32).max(1);
    let new_height = ((height as f64 * scale).round() as u32).max(1);
    (new_width.min(max_width), new_height.min(max_height))
}

/// Scale `bitmap` down to fit the display box, bilinear.
///
/// Returns an unchanged copy when the bitmap already fits.
pub fn scale_to_fit(bitmap: &Bitmap, max_width: u32, max_height: u32) -> Bitmap {
    let (new_width, new_height) =
        fit_dimensions(bitmap.width, bitmap.height, max_width, max_height);

    if new_width == bitmap.width && new_height == bitmap.height {
        return bitmap.clone();
    }

    let img = match bitmap.to_rgb_image() {
        Some(img) => img,
        // unreachable for bitmaps holding the length invariant
        None => return bitmap.clone(),
    };

    let resized = imageops::resize(&img, new_width, new_height, FilterType::Triangle);
    Bitmap::from_rgb_image(resized)
}
