//! Snaplab Core - Image pipeline library
//!
//! This crate provides the processing core for Snaplab: bitmap
//! acquisition from files and cameras, the transform pipeline (channel
//! isolation, crop, circle stamp, Gaussian blur), preview scaling, and
//! PNG/JPEG export. The UI layer is a thin adapter over
//! [`session::EditSession`].

pub mod bitmap;
pub mod encode;
pub mod preview;
pub mod session;
pub mod source;
pub mod transform;

pub use bitmap::Bitmap;
pub use encode::{encode, EncodeError, OutputFormat};
pub use session::{EditSession, SessionError};
pub use source::{CaptureError, DecodeError};
pub use transform::{
    blur, crop, isolate_channel, stamp_circle, ChannelSelection, TransformError,
};
