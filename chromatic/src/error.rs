use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Channel count must be at least 1")]
    ZeroChannels,

    #[error("Unsupported channel count: expected at least {expected}, got {actual}")]
    UnsupportedChannelCount { expected: usize, actual: usize },

    #[error("Buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    #[error("Channel {channel} has {actual} samples, expected {expected}")]
    ChannelLength {
        channel: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Channel index {index} out of range for {channel_count} channels")]
    ChannelIndex { index: usize, channel_count: usize },

    #[error("Image size {width}x{height}x{channel_count} overflows usize")]
    DimensionOverflow {
        width: usize,
        height: usize,
        channel_count: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Returns `width * height * channel_count`, or an error when it does not fit in `usize`.
pub(crate) fn checked_len(width: usize, height: usize, channel_count: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(channel_count))
        .ok_or(Error::DimensionOverflow {
            width,
            height,
            channel_count,
        })
}
