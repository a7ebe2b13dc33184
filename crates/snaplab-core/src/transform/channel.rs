//! Channel isolation: keep one color channel, zero the other two.

use serde::{Deserialize, Serialize};

use crate::bitmap::Bitmap;

/// Which channel to keep when isolating, or `Original` for a passthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChannelSelection {
    /// Keep the bitmap unchanged.
    #[default]
    Original,
    Red,
    Green,
    Blue,
}

/// Zero out the two channels not selected by `selection`.
///
/// `ChannelSelection::Original` returns a copy of the input unchanged.
/// Always succeeds given a valid bitmap.
pub fn isolate_channel(bitmap: &Bitmap, selection: ChannelSelection) -> Bitmap {
    let keep = match selection {
        ChannelSelection::Original => return bitmap.clone(),
        ChannelSelection::Red => 0,
        ChannelSelection::Green => 1,
        ChannelSelection::Blue => 2,
    };

    let mut result = bitmap.clone();
    for pixel in result.pixels.chunks_exact_mut(3) {
        for (channel, value) in pixel.iter_mut().enumerate() {
            if channel != keep {
                *value = 0;
            }
        }
    }
    result
}
