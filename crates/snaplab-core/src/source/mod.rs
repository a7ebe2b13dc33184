//! Bitmap acquisition: decode a file from disk or grab a single frame
//! from a camera device.
//!
//! Both sources produce an owned [`crate::bitmap::Bitmap`] and have no
//! further dependencies on the rest of the pipeline. Camera handles are
//! scoped to the capture call and never escape it.

pub mod camera;
pub mod file;

pub use camera::{capture_frame, list_devices, CaptureError, DeviceInfo};
pub use file::{decode, load_from_path, DecodeError};
