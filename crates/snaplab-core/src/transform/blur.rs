//! Gaussian blur parameterized by kernel size.

use imageproc::filter::gaussian_blur_f32;

use super::TransformError;
use crate::bitmap::Bitmap;

/// Apply a Gaussian smoothing kernel of `kernel_size x kernel_size`.
///
/// The standard deviation is derived from the kernel size with the
/// conventional auto-sigma formula `0.3 * ((k - 1) * 0.5 - 1) + 0.8`.
/// A kernel size of 1 is the identity. Output dimensions always equal
/// input dimensions.
///
/// # Errors
///
/// Returns `TransformError::InvalidKernelSize` for even sizes
/// (including 0); Gaussian kernels require an odd size. The input is
/// untouched on failure.
pub fn blur(bitmap: &Bitmap, kernel_size: u32) -> Result<Bitmap, TransformError> {
    if kernel_size % 2 == 0 {
        return Err(TransformError::InvalidKernelSize(kernel_size));
    }
    if kernel_size == 1 {
        return Ok(bitmap.clone());
    }

    let img = match bitmap.to_rgb_image() {
        Some(img) => img,
        // unreachable for bitmaps holding the length invariant
        None => return Ok(bitmap.clone()),
    };

    let blurred = gaussian_blur_f32(&img, sigma_for_kernel(kernel_size));
    Ok(Bitmap::from_rgb_image(blurred))
}

/// Standard deviation for a given kernel size.
fn sigma_for_kernel(kernel_size: u32) -> f32 {
    0.3 * ((kernel_size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_bitmap(width: u32, height: u32) -> Bitmap {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8);
                pixels.push(((y * 255) / height.max(1)) as u8);
                pixels.push(128);
            }
        }
        Bitmap::new(width, height, pixels)
    }

    #[test]
    fn test_odd_kernel_preserves_dimensions() {
        let bmp = gradient_bitmap(32, 24);
        for k in [3, 5, 7, 15] {
            let result = blur(&bmp, k).unwrap();
            assert_eq!((result.width, result.height), (32, 24), "kernel {k}");
            assert_eq!(result.pixels.len(), 32 * 24 * 3);
        }
    }

    #[test]
    fn test_even_kernel_rejected() {
        let bmp = gradient_bitmap(8, 8);
        for k in [0, 2, 4, 10] {
            let result = blur(&bmp, k);
            assert!(
                matches!(result, Err(TransformError::InvalidKernelSize(size)) if size == k),
                "kernel {k} should be rejected"
            );
        }
    }

    #[test]
    fn test_kernel_one_is_identity() {
        let bmp = gradient_bitmap(10, 10);
        assert_eq!(blur(&bmp, 1).unwrap(), bmp);
    }

    #[test]
    fn test_failed_blur_leaves_input_untouched() {
        let bmp = gradient_bitmap(10, 10);
        let before = bmp.clone();
        let _ = blur(&bmp, 4);
        assert_eq!(bmp, before);
    }

    #[test]
    fn test_constant_bitmap_stays_constant() {
        let bmp = Bitmap::new(16, 16, vec![200u8; 16 * 16 * 3]);
        let result = blur(&bmp, 5).unwrap();

        // A uniform image is a fixed point of smoothing, up to rounding
        for &value in &result.pixels {
            assert!(
                value.abs_diff(200) <= 1,
                "expected ~200, got {value}"
            );
        }
    }

    #[test]
    fn test_blur_actually_smooths() {
        // A single bright pixel on black spreads into its neighborhood
        let mut pixels = vec![0u8; 9 * 9 * 3];
        let center = ((4 * 9 + 4) * 3) as usize;
        pixels[center] = 255;
        pixels[center + 1] = 255;
        pixels[center + 2] = 255;
        let bmp = Bitmap::new(9, 9, pixels);

        let result = blur(&bmp, 5).unwrap();

        let center_after = result.pixel_at(4, 4);
        let neighbor_after = result.pixel_at(5, 4);
        assert!(center_after[0] < 255, "peak should flatten");
        assert!(neighbor_after[0] > 0, "energy should spread");
    }

    #[test]
    fn test_sigma_for_kernel() {
        // k = 3 gives the conventional 0.8
        assert!((sigma_for_kernel(3) - 0.8).abs() < 1e-6);
        // sigma grows with kernel size
        assert!(sigma_for_kernel(15) > sigma_for_kernel(5));
    }
}
