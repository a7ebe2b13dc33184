//! Circle stamping: draw an annotation circle directly onto the bitmap.
//!
//! This is the one in-place operation of the pipeline. There is no
//! bounds validation: coordinates outside the canvas are silently
//! clipped by the drawing primitive, matching raster-drawing semantics.

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut};

use crate::bitmap::Bitmap;

/// The fixed annotation color.
const STAMP_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Draw a circle outline of the given thickness centered at
/// `(cx, cy)`, or a filled disk when `thickness` is zero or negative.
///
/// Mutates `bitmap` in place. Pixels falling outside the canvas are
/// clipped; a negative radius draws nothing. No failure mode.
pub fn stamp_circle(bitmap: &mut Bitmap, cx: i32, cy: i32, radius: i32, thickness: i32) {
    if radius < 0 {
        return;
    }

    let (width, height) = (bitmap.width, bitmap.height);
    if bitmap.pixels.len() != (width as usize) * (height as usize) * 3 {
        return;
    }

    let mut canvas = match RgbImage::from_raw(width, height, std::mem::take(&mut bitmap.pixels)) {
        Some(canvas) => canvas,
        // unreachable: the buffer length was checked above
        None => return,
    };

    if thickness <= 0 {
        draw_filled_circle_mut(&mut canvas, (cx, cy), radius, STAMP_COLOR);
    } else {
        // Widen the outline by stamping concentric one-pixel rings
        let inner = radius.saturating_sub((thickness - 1) / 2).max(0);
        let outer = radius.saturating_add(thickness / 2);
        for r in inner..=outer {
            draw_hollow_circle_mut(&mut canvas, (cx, cy), r, STAMP_COLOR);
        }
    }

    bitmap.pixels = canvas.into_raw();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black_bitmap(width: u32, height: u32) -> Bitmap {
        Bitmap::new(width, height, vec![0u8; (width * height * 3) as usize])
    }

    fn stamp_bytes(color: Rgb<u8>) -> [u8; 3] {
        color.0
    }

    #[test]
    fn test_outline_touches_cardinal_points() {
        let mut bmp = black_bitmap(21, 21);
        stamp_circle(&mut bmp, 10, 10, 5, 1);

        let stamp = stamp_bytes(STAMP_COLOR);
        assert_eq!(bmp.pixel_at(15, 10), stamp); // east
        assert_eq!(bmp.pixel_at(5, 10), stamp); // west
        assert_eq!(bmp.pixel_at(10, 15), stamp); // south
        assert_eq!(bmp.pixel_at(10, 5), stamp); // north
    }

    #[test]
    fn test_outline_leaves_center_untouched() {
        let mut bmp = black_bitmap(21, 21);
        stamp_circle(&mut bmp, 10, 10, 5, 1);
        assert_eq!(bmp.pixel_at(10, 10), [0, 0, 0]);
    }

    #[test]
    fn test_filled_disk_covers_center() {
        let mut bmp = black_bitmap(21, 21);
        stamp_circle(&mut bmp, 10, 10, 5, -1);

        let stamp = stamp_bytes(STAMP_COLOR);
        assert_eq!(bmp.pixel_at(10, 10), stamp);
        assert_eq!(bmp.pixel_at(12, 10), stamp);
        // Outside the disk stays black
        assert_eq!(bmp.pixel_at(0, 0), [0, 0, 0]);
    }

    #[test]
    fn test_thick_outline_spans_rings() {
        let mut bmp = black_bitmap(41, 41);
        stamp_circle(&mut bmp, 20, 20, 10, 5);

        let stamp = stamp_bytes(STAMP_COLOR);
        // Rings from radius 8 through 12 along the east axis
        for r in 8..=12 {
            assert_eq!(bmp.pixel_at(20 + r, 20), stamp, "ring {r} missing");
        }
        assert_eq!(bmp.pixel_at(20 + 6, 20), [0, 0, 0]);
        assert_eq!(bmp.pixel_at(20 + 14, 20), [0, 0, 0]);
    }

    #[test]
    fn test_out_of_canvas_center_is_clipped() {
        let mut bmp = black_bitmap(10, 10);
        let before = bmp.clone();

        stamp_circle(&mut bmp, 100, 100, 5, 1);

        // Fully outside: nothing drawn, nothing panicked
        assert_eq!(bmp, before);
    }

    #[test]
    fn test_partially_outside_circle_is_clipped() {
        let mut bmp = black_bitmap(10, 10);
        stamp_circle(&mut bmp, 0, 5, 4, 1);

        // The part inside the canvas is drawn
        assert_eq!(bmp.pixel_at(4, 5), stamp_bytes(STAMP_COLOR));
        // Dimensions and buffer length are unchanged
        assert_eq!((bmp.width, bmp.height), (10, 10));
        assert_eq!(bmp.byte_size(), 10 * 10 * 3);
    }

    #[test]
    fn test_negative_radius_draws_nothing() {
        let mut bmp = black_bitmap(10, 10);
        let before = bmp.clone();
        stamp_circle(&mut bmp, 5, 5, -3, 1);
        assert_eq!(bmp, before);
    }

    #[test]
    fn test_dimensions_never_change() {
        let mut bmp = black_bitmap(17, 9);
        stamp_circle(&mut bmp, 8, 4, 30, 3);
        assert_eq!((bmp.width, bmp.height), (17, 9));
        assert_eq!(bmp.byte_size(), 17 * 9 * 3);
    }
}
