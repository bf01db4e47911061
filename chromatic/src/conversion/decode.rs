use crate::channel_image::ChannelImage;
use crate::conversion::ChannelLayout;
use crate::error::{checked_len, Error, Result};
use crate::sample::ChannelConvert;

/// Builds a planar image from an interleaved 8-bit buffer.
///
/// Byte `k` of each `channel_count`-byte pixel group becomes channel `k`, scaled
/// to `byte / 255.0`. Pixels are read row-major, so pixel (x, y) comes from
/// offset `(y * width + x) * channel_count`.
pub fn decode_interleaved(
    bytes: &[u8],
    width: usize,
    height: usize,
    channel_count: usize,
) -> Result<ChannelImage> {
    if channel_count == 0 {
        return Err(Error::ZeroChannels);
    }

    let expected = checked_len(width, height, channel_count)?;
    if bytes.len() != expected {
        return Err(Error::BufferSize {
            expected,
            actual: bytes.len(),
        });
    }

    let layout = ChannelLayout::from_channel_count(channel_count);
    tracing::trace!(width, height, %layout, "decoding interleaved buffer");

    ChannelImage::from_channels(width, height, decode_planes(bytes, layout))
}

/// Splits a tightly packed buffer into one plane per channel.
/// `bytes.len()` must be a multiple of the layout's channel count.
pub(crate) fn decode_planes(bytes: &[u8], layout: ChannelLayout) -> Vec<Vec<f32>> {
    match layout {
        ChannelLayout::Rgb => decode_rgb(bytes),
        ChannelLayout::Rgba => decode_rgba(bytes),
        ChannelLayout::Other(channel_count) => decode_generic(bytes, channel_count),
    }
}

fn decode_rgb(bytes: &[u8]) -> Vec<Vec<f32>> {
    let pixel_count = bytes.len() / 3;
    let mut r = Vec::<f32>::with_capacity(pixel_count);
    let mut g = Vec::<f32>::with_capacity(pixel_count);
    let mut b = Vec::<f32>::with_capacity(pixel_count);

    for px in bytes.chunks_exact(3) {
        r.push(px[0].convert());
        g.push(px[1].convert());
        b.push(px[2].convert());
    }

    vec![r, g, b]
}

fn decode_rgba(bytes: &[u8]) -> Vec<Vec<f32>> {
    let pixel_count = bytes.len() / 4;
    let mut r = Vec::<f32>::with_capacity(pixel_count);
    let mut g = Vec::<f32>::with_capacity(pixel_count);
    let mut b = Vec::<f32>::with_capacity(pixel_count);
    let mut a = Vec::<f32>::with_capacity(pixel_count);

    for px in bytes.chunks_exact(4) {
        r.push(px[0].convert());
        g.push(px[1].convert());
        b.push(px[2].convert());
        a.push(px[3].convert());
    }

    vec![r, g, b, a]
}

pub(super) fn decode_generic(bytes: &[u8], channel_count: usize) -> Vec<Vec<f32>> {
    debug_assert!(channel_count > 0);

    let pixel_count = bytes.len() / channel_count;
    let mut planes: Vec<Vec<f32>> = (0..channel_count)
        .map(|_| Vec::with_capacity(pixel_count))
        .collect();

    for px in bytes.chunks_exact(channel_count) {
        for (plane, &byte) in planes.iter_mut().zip(px) {
            plane.push(byte.convert());
        }
    }

    planes
}
