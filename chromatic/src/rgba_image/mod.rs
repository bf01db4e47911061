#[cfg(test)]
mod tests;

use strum_macros::{Display, EnumIter};

use crate::channel_image::{ChannelFilter, ChannelImage, PlanarImage};
use crate::conversion::{decode_interleaved, encode_planes, RGBA_BYTES_PER_PIXEL};
use crate::error::{checked_len, Error, Result};
use crate::sample::OpaqueAlpha;

/// Role of each plane in an [`RgbaImage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum RgbaChannel {
    Red = 0,
    Green = 1,
    Blue = 2,
    Alpha = 3,
}

impl RgbaChannel {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_color(self) -> bool {
        self != RgbaChannel::Alpha
    }
}

/// A planar image fixed at four channels: red, green, blue, then alpha.
#[derive(Debug, PartialEq)]
pub struct RgbaImage {
    image: ChannelImage,
}

impl RgbaImage {
    pub const CHANNEL_COUNT: usize = 4;

    /// Fully transparent black image.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Ok(Self {
            image: ChannelImage::new(width, height, Self::CHANNEL_COUNT)?,
        })
    }

    /// Copies the first four channels of `source`.
    ///
    /// Missing color channels are black and a missing alpha channel is fully
    /// opaque. Channels past the fourth are dropped.
    pub fn from_image<I: PlanarImage + ?Sized>(source: &I) -> Result<Self> {
        let width = source.width();
        let height = source.height();
        checked_len(width, height, Self::CHANNEL_COUNT)?;

        let pixel_count = width * height;
        let source_channels = source.channel_count();
        let copied = source_channels.min(Self::CHANNEL_COUNT);

        let mut channels = Vec::with_capacity(Self::CHANNEL_COUNT);
        for channel in 0..copied {
            let samples = source.channel(channel);
            if samples.len() != pixel_count {
                return Err(Error::ChannelLength {
                    channel,
                    expected: pixel_count,
                    actual: samples.len(),
                });
            }
            channels.push(samples.to_vec());
        }

        if copied < Self::CHANNEL_COUNT {
            tracing::debug!(
                source_channels,
                width,
                height,
                "padding image to RGBA with opaque alpha"
            );
            channels.resize_with(RgbaChannel::Alpha.index(), || vec![0.0; pixel_count]);
            channels.push(vec![f32::opaque_alpha(); pixel_count]);
        } else if source_channels > Self::CHANNEL_COUNT {
            tracing::debug!(
                source_channels,
                dropped = source_channels - Self::CHANNEL_COUNT,
                "dropping channels past alpha"
            );
        }

        Ok(Self {
            image: ChannelImage::from_channels(width, height, channels)?,
        })
    }

    /// Decodes a tightly packed RGBA byte buffer.
    pub fn from_bytes(bytes: &[u8], width: usize, height: usize) -> Result<Self> {
        Ok(Self {
            image: decode_interleaved(bytes, width, height, Self::CHANNEL_COUNT)?,
        })
    }

    /// Packs the image into `width * height * 4` bytes, RGBA order.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; self.pixel_count() * RGBA_BYTES_PER_PIXEL];
        encode_planes(self, &mut bytes);
        bytes
    }

    /// Copy that stays an `RgbaImage`, built by pasting into a blank frame.
    pub fn clone_as_rgba(&self) -> RgbaImage {
        let mut copy = RgbaImage {
            image: self.image.zeroed_like(),
        };
        copy.image.overlay(&self.image, 0, 0);
        copy
    }

    /// Applies `filter` to the color channels and leaves alpha alone.
    pub fn filter<F: ChannelFilter + ?Sized>(&mut self, filter: &F) {
        let width = self.width();
        let height = self.height();
        for channel in 0..Self::CHANNEL_COUNT - 1 {
            filter.apply(self.image.channel_mut(channel), width, height);
        }
    }

    /// Applies `filter` to one channel, alpha included.
    pub fn filter_channel<F: ChannelFilter + ?Sized>(
        &mut self,
        filter: &F,
        index: usize,
    ) -> Result<()> {
        self.image.filter_channel(filter, index)
    }

    pub fn plane(&self, channel: RgbaChannel) -> &[f32] {
        self.image.channel(channel.index())
    }

    pub fn plane_mut(&mut self, channel: RgbaChannel) -> &mut [f32] {
        self.image.channel_mut(channel.index())
    }

    pub fn as_channel_image(&self) -> &ChannelImage {
        &self.image
    }

    pub fn into_channel_image(self) -> ChannelImage {
        self.image
    }
}

impl Clone for RgbaImage {
    fn clone(&self) -> Self {
        self.clone_as_rgba()
    }
}

impl PlanarImage for RgbaImage {
    fn width(&self) -> usize {
        self.image.width()
    }

    fn height(&self) -> usize {
        self.image.height()
    }

    fn channel_count(&self) -> usize {
        Self::CHANNEL_COUNT
    }

    fn channel(&self, index: usize) -> &[f32] {
        self.image.channel(index)
    }
}

impl From<RgbaImage> for ChannelImage {
    fn from(image: RgbaImage) -> Self {
        image.image
    }
}

impl std::fmt::Display for RgbaImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{} RGBA", self.width(), self.height())
    }
}
