mod decode;
mod encode;


#[cfg(feature = "bench")]
pub mod bench;

pub use decode::decode_interleaved;
pub use encode::{encode_rgba, encode_rgba_into};

pub(crate) use decode::decode_planes;
pub(crate) use encode::encode_planes;

/// Bytes per pixel in every buffer produced by the encoder.
pub const RGBA_BYTES_PER_PIXEL: usize = 4;

/// Channel arrangement of an interleaved buffer, used to pick a conversion
/// path once per call instead of branching per pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelLayout {
    Rgb,
    Rgba,
    Other(usize),
}

impl ChannelLayout {
    pub fn from_channel_count(channel_count: usize) -> Self {
        match channel_count {
            3 => ChannelLayout::Rgb,
            4 => ChannelLayout::Rgba,
            n => ChannelLayout::Other(n),
        }
    }

    pub fn channel_count(&self) -> usize {
        match self {
            ChannelLayout::Rgb => 3,
            ChannelLayout::Rgba => 4,
            ChannelLayout::Other(n) => *n,
        }
    }
}

impl std::fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelLayout::Rgb => write!(f, "RGB"),
            ChannelLayout::Rgba => write!(f, "RGBA"),
            ChannelLayout::Other(n) => write!(f, "{}ch", n),
        }
    }
}
