
use crate::error::{checked_len, Error, Result};

/// Read access to a planar image: one normalized-float array per channel,
/// each `width * height` samples long in row-major order.
pub trait PlanarImage {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn channel_count(&self) -> usize;

    /// Samples of channel `index`. Panics if `index >= channel_count()`.
    fn channel(&self, index: usize) -> &[f32];

    fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Copies the image into a plain [`ChannelImage`], whatever the concrete type.
    /// Fails when the source has no channels or a plane of the wrong length.
    fn to_channel_image(&self) -> Result<ChannelImage> {
        let channels = (0..self.channel_count())
            .map(|c| self.channel(c).to_vec())
            .collect();
        ChannelImage::from_channels(self.width(), self.height(), channels)
    }
}

/// Per-channel transform applied in place.
pub trait ChannelFilter {
    fn apply(&self, samples: &mut [f32], width: usize, height: usize);
}

impl<F> ChannelFilter for F
where
    F: Fn(&mut [f32], usize, usize),
{
    fn apply(&self, samples: &mut [f32], width: usize, height: usize) {
        self(samples, width, height)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChannelImage {
    width: usize,
    height: usize,
    channels: Vec<Vec<f32>>,
}

impl ChannelImage {
    /// Creates an image with every sample of every channel set to 0.0.
    pub fn new(width: usize, height: usize, channel_count: usize) -> Result<Self> {
        if channel_count == 0 {
            return Err(Error::ZeroChannels);
        }
        checked_len(width, height, channel_count)?;

        let pixel_count = width * height;
        Ok(Self {
            width,
            height,
            channels: vec![vec![0.0; pixel_count]; channel_count],
        })
    }

    /// Adopts already-filled planes without zeroing them first.
    pub fn from_channels(width: usize, height: usize, channels: Vec<Vec<f32>>) -> Result<Self> {
        if channels.is_empty() {
            return Err(Error::ZeroChannels);
        }
        checked_len(width, height, channels.len())?;

        let expected = width * height;
        for (channel, samples) in channels.iter().enumerate() {
            if samples.len() != expected {
                return Err(Error::ChannelLength {
                    channel,
                    expected,
                    actual: samples.len(),
                });
            }
        }

        Ok(Self {
            width,
            height,
            channels,
        })
    }

    /// Blank image with the same dimensions and channel count.
    pub(crate) fn zeroed_like(&self) -> ChannelImage {
        ChannelImage {
            width: self.width,
            height: self.height,
            channels: vec![vec![0.0; self.width * self.height]; self.channels.len()],
        }
    }

    pub fn channel_mut(&mut self, index: usize) -> &mut [f32] {
        &mut self.channels[index]
    }

    pub fn channels(&self) -> &[Vec<f32>] {
        &self.channels
    }

    pub fn into_channels(self) -> Vec<Vec<f32>> {
        self.channels
    }

    /// Sample of `channel` at pixel (x, y).
    ///
    /// `x < width` and `y < height` are only checked in debug builds; in release
    /// an `x` past the row end reads from the next row. Panics if `channel` or
    /// the linear index is out of range.
    pub fn sample(&self, x: usize, y: usize, channel: usize) -> f32 {
        debug_assert!(x < self.width, "x coordinate out of bounds");
        debug_assert!(y < self.height, "y coordinate out of bounds");
        self.channels[channel][y * self.width + x]
    }

    /// Overlays `source` with its top-left corner at the origin.
    pub fn paste<I: PlanarImage + ?Sized>(&mut self, source: &I) -> Result<()> {
        self.paste_at(source, 0, 0)
    }

    /// Overlays `source` with its top-left corner at (`x`, `y`).
    ///
    /// Only the region covered by both images is written, and only the first
    /// `min(self.channel_count(), source.channel_count())` channels. Every
    /// copied source plane must hold `source.pixel_count()` samples.
    pub fn paste_at<I: PlanarImage + ?Sized>(
        &mut self,
        source: &I,
        x: usize,
        y: usize,
    ) -> Result<()> {
        checked_len(source.width(), source.height(), 1)?;

        let expected = source.pixel_count();
        let channel_count = self.channels.len().min(source.channel_count());
        for channel in 0..channel_count {
            let actual = source.channel(channel).len();
            if actual != expected {
                return Err(Error::ChannelLength {
                    channel,
                    expected,
                    actual,
                });
            }
        }

        self.overlay(source, x, y);

        Ok(())
    }

    /// Unchecked core of [`paste_at`](Self::paste_at). Source planes must be
    /// `source.pixel_count()` long.
    pub(crate) fn overlay<I: PlanarImage + ?Sized>(&mut self, source: &I, x: usize, y: usize) {
        if x >= self.width || y >= self.height {
            return;
        }

        let copy_width = source.width().min(self.width - x);
        let copy_height = source.height().min(self.height - y);
        let channel_count = self.channels.len().min(source.channel_count());

        for (c, dst) in self.channels.iter_mut().enumerate().take(channel_count) {
            let src = source.channel(c);
            for row in 0..copy_height {
                let src_start = row * source.width();
                let dst_start = (y + row) * self.width + x;
                dst[dst_start..dst_start + copy_width]
                    .copy_from_slice(&src[src_start..src_start + copy_width]);
            }
        }
    }

    /// Applies `filter` to every channel.
    pub fn filter<F: ChannelFilter + ?Sized>(&mut self, filter: &F) {
        for samples in self.channels.iter_mut() {
            filter.apply(samples, self.width, self.height);
        }
    }

    /// Applies `filter` to channel `index` only.
    pub fn filter_channel<F: ChannelFilter + ?Sized>(
        &mut self,
        filter: &F,
        index: usize,
    ) -> Result<()> {
        let channel_count = self.channels.len();
        let samples = self
            .channels
            .get_mut(index)
            .ok_or(Error::ChannelIndex {
                index,
                channel_count,
            })?;
        filter.apply(samples, self.width, self.height);

        Ok(())
    }
}

impl PlanarImage for ChannelImage {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn channel_count(&self) -> usize {
        self.channels.len()
    }

    fn channel(&self, index: usize) -> &[f32] {
        &self.channels[index]
    }
}

impl std::fmt::Display for ChannelImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} {}ch",
            self.width,
            self.height,
            self.channels.len()
        )
    }
}
