//! The transform pipeline: channel isolation, cropping, circle
//! stamping, and Gaussian blur.
//!
//! Every operation is a pure function of `(bitmap, parameters)` that
//! returns a freshly owned bitmap, except [`stamp_circle`] which mutates
//! its input in place and is documented as such. Fallible operations
//! validate first and never touch the input on failure.

mod blur;
mod channel;
mod circle;
mod crop;

pub use blur::blur;
pub use channel::{isolate_channel, ChannelSelection};
pub use circle::stamp_circle;
pub use crop::crop;

use thiserror::Error;

/// Errors from the fallible transform operations.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The crop rectangle extends outside the image.
    #[error(
        "crop rectangle ({x}, {y}) {width}x{height} exceeds the \
         {image_width}x{image_height} image bounds"
    )]
    CropOutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },

    /// The crop rectangle has zero width or height.
    #[error("crop rectangle must have non-zero width and height")]
    EmptyCropRegion,

    /// Gaussian kernels require an odd size.
    #[error("Gaussian kernel size must be odd, got {0}")]
    InvalidKernelSize(u32),
}
