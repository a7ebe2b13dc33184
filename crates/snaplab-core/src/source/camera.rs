//! Camera image source: grab exactly one frame from a device.
//!
//! Acquisition is scoped to [`capture_frame`]: the device is opened,
//! one frame is read and converted to RGB, and the handle is dropped
//! before the function returns, on success and failure alike. The call
//! blocks the caller for the whole open + read + release sequence.

use image::RgbImage;
use nokhwa::{
    pixel_format::RgbFormat,
    query,
    utils::{ApiBackend, CameraIndex, RequestedFormat, RequestedFormatType},
    Camera,
};
use thiserror::Error;

use crate::bitmap::Bitmap;

/// Errors from single-frame camera capture.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The device could not be opened.
    #[error("camera device {index} unavailable: {reason}")]
    DeviceUnavailable { index: u32, reason: String },

    /// The device opened but no frame could be read.
    #[error("failed to read a frame: {0}")]
    Frame(String),

    /// The frame was read but could not be converted to RGB.
    #[error("failed to convert the captured frame: {0}")]
    Decode(String),
}

/// An attached camera device, as reported by the platform backend.
#[derive(Debug, Clone)]
pub struct DeviceInfo {
    pub index: String,
    pub name: String,
    pub description: String,
}

/// Open camera `index`, read one frame, and release the device.
pub fn capture_frame(index: u32) -> Result<Bitmap, CaptureError> {
    let requested =
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution);

    let mut camera = Camera::new(CameraIndex::Index(index), requested).map_err(|e| {
        CaptureError::DeviceUnavailable {
            index,
            reason: e.to_string(),
        }
    })?;

    camera
        .open_stream()
        .map_err(|e| CaptureError::DeviceUnavailable {
            index,
            reason: e.to_string(),
        })?;
    log::debug!("camera {index} opened for single-frame capture");

    let result = read_one_frame(&mut camera);

    if let Err(e) = camera.stop_stream() {
        log::warn!("camera {index} stop failed: {e}");
    }
    // camera is dropped here, releasing the device on every path
    result
}

fn read_one_frame(camera: &mut Camera) -> Result<Bitmap, CaptureError> {
    let frame = camera
        .frame()
        .map_err(|e| CaptureError::Frame(e.to_string()))?;

    let rgb: RgbImage = frame
        .decode_image::<RgbFormat>()
        .map_err(|e| CaptureError::Decode(e.to_string()))?;

    Ok(Bitmap::from_rgb_image(rgb))
}

/// Enumerate the attached camera devices.
///
/// Returns an empty list when the platform backend cannot be queried.
pub fn list_devices() -> Vec<DeviceInfo> {
    let cameras = match query(ApiBackend::Auto) {
        Ok(cameras) => cameras,
        Err(e) => {
            log::warn!("camera query failed: {e}");
            return Vec::new();
        }
    };

    cameras
        .into_iter()
        .map(|camera| DeviceInfo {
            index: camera.index().to_string(),
            name: camera.human_name(),
            description: camera.description().to_string(),
        })
        .collect()
}
