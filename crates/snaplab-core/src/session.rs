//! The edit session: owner of the Original/Working bitmap pair.
//!
//! A session starts **Empty**. A successful load or capture moves it to
//! **Loaded** and it stays loaded until the process ends; the next
//! load/capture replaces both bitmaps together. The original is set
//! once per acquisition and never mutated; every transform replaces the
//! working bitmap wholesale on success and leaves it untouched on
//! failure (the circle stamp mutates it in place and cannot fail).

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::bitmap::Bitmap;
use crate::encode::{self, EncodeError, OutputFormat};
use crate::source::{camera, file, CaptureError, DecodeError};
use crate::transform::{self, ChannelSelection, TransformError};

/// Errors surfaced to the user by session operations.
///
/// Component errors pass through transparently; `NoImage` is the
/// session's own "nothing to do" report for transform and export
/// requests in the Empty state.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no image loaded")]
    NoImage,

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
struct LoadedPair {
    original: Bitmap,
    working: Bitmap,
}

/// Session owning the Original/Working bitmap pair.
#[derive(Debug, Default)]
pub struct EditSession {
    loaded: Option<LoadedPair>,
}

impl EditSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// True once an image has been loaded or captured.
    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    /// The untouched bitmap as acquired, if any.
    pub fn original(&self) -> Option<&Bitmap> {
        self.loaded.as_ref().map(|pair| &pair.original)
    }

    /// The bitmap currently subject to transforms and display, if any.
    pub fn working(&self) -> Option<&Bitmap> {
        self.loaded.as_ref().map(|pair| &pair.working)
    }

    /// Load an image file, replacing both bitmaps on success.
    ///
    /// A failed load leaves an already-loaded pair untouched.
    pub fn load_from_path(&mut self, path: impl AsRef<Path>) -> Result<&Bitmap, SessionError> {
        let bitmap = file::load_from_path(path.as_ref())?;
        log::debug!(
            "loaded {} ({})",
            path.as_ref().display(),
            bitmap.dimensions_text()
        );
        Ok(self.install(bitmap))
    }

    /// Capture a single frame from camera `index`, replacing both
    /// bitmaps on success.
    pub fn capture_from_device(&mut self, index: u32) -> Result<&Bitmap, SessionError> {
        let bitmap = camera::capture_frame(index)?;
        log::debug!("captured frame from device {index} ({})", bitmap.dimensions_text());
        Ok(self.install(bitmap))
    }

    /// Replace the working bitmap with a channel-isolated copy.
    pub fn isolate_channel(
        &mut self,
        selection: ChannelSelection,
    ) -> Result<&Bitmap, SessionError> {
        let pair = self.loaded.as_mut().ok_or(SessionError::NoImage)?;
        pair.working = transform::isolate_channel(&pair.working, selection);
        Ok(&pair.working)
    }

    /// Replace the working bitmap with the cropped sub-rectangle.
    pub fn crop(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    ) -> Result<&Bitmap, SessionError> {
        let pair = self.loaded.as_mut().ok_or(SessionError::NoImage)?;
        pair.working = transform::crop(&pair.working, x, y, width, height)?;
        Ok(&pair.working)
    }

    /// Stamp a circle directly onto the working bitmap.
    pub fn stamp_circle(
        &mut self,
        cx: i32,
        cy: i32,
        radius: i32,
        thickness: i32,
    ) -> Result<&Bitmap, SessionError> {
        let pair = self.loaded.as_mut().ok_or(SessionError::NoImage)?;
        transform::stamp_circle(&mut pair.working, cx, cy, radius, thickness);
        Ok(&pair.working)
    }

    /// Replace the working bitmap with a Gaussian-blurred copy.
    pub fn blur(&mut self, kernel_size: u32) -> Result<&Bitmap, SessionError> {
        let pair = self.loaded.as_mut().ok_or(SessionError::NoImage)?;
        pair.working = transform::blur(&pair.working, kernel_size)?;
        Ok(&pair.working)
    }

    /// Serialize the working bitmap into the requested container format.
    pub fn encode(&self, format: OutputFormat) -> Result<Vec<u8>, SessionError> {
        let pair = self.loaded.as_ref().ok_or(SessionError::NoImage)?;
        Ok(encode::encode(&pair.working, format)?)
    }

    /// Encode the working bitmap for the extension of `path` and write
    /// the bytes there.
    pub fn export_to_path(&self, path: impl AsRef<Path>) -> Result<(), SessionError> {
        let format = OutputFormat::from_path(path.as_ref())?;
        let bytes = self.encode(format)?;
        fs::write(path.as_ref(), bytes)?;
        log::debug!("exported working bitmap to {}", path.as_ref().display());
        Ok(())
    }

    fn install(&mut self, bitmap: Bitmap) -> &Bitmap {
        let pair = self.loaded.insert(LoadedPair {
            original: bitmap.clone(),
            working: bitmap,
        });
        &pair.working
    }
}
