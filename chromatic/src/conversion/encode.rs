use crate::channel_image::PlanarImage;
use crate::conversion::{ChannelLayout, RGBA_BYTES_PER_PIXEL};
use crate::error::{checked_len, Error, Result};
use crate::sample::{ChannelConvert, OpaqueAlpha};

/// Packs any planar image with at least 3 channels into a new RGBA buffer.
///
/// Channel 3 is used as alpha when present; channels past 3 are ignored. A
/// 3-channel image is written fully opaque. Works on any [`PlanarImage`], so
/// callers never need to build an intermediate [`RgbaImage`](crate::RgbaImage).
pub fn encode_rgba<I: PlanarImage + ?Sized>(image: &I) -> Result<Vec<u8>> {
    let len = checked_len(image.width(), image.height(), RGBA_BYTES_PER_PIXEL)?;
    let mut bytes = vec![0u8; len];
    encode_rgba_into(image, &mut bytes)?;

    Ok(bytes)
}

/// Same as [`encode_rgba`], writing into a caller-owned buffer of exactly
/// `width * height * 4` bytes.
pub fn encode_rgba_into<I: PlanarImage + ?Sized>(image: &I, out: &mut [u8]) -> Result<()> {
    let channel_count = image.channel_count();
    if channel_count < 3 {
        return Err(Error::UnsupportedChannelCount {
            expected: 3,
            actual: channel_count,
        });
    }

    let expected = checked_len(image.width(), image.height(), RGBA_BYTES_PER_PIXEL)?;
    if out.len() != expected {
        return Err(Error::BufferSize {
            expected,
            actual: out.len(),
        });
    }

    let pixel_count = image.pixel_count();
    for channel in 0..channel_count.min(RGBA_BYTES_PER_PIXEL) {
        let actual = image.channel(channel).len();
        if actual != pixel_count {
            return Err(Error::ChannelLength {
                channel,
                expected: pixel_count,
                actual,
            });
        }
    }

    tracing::trace!(
        width = image.width(),
        height = image.height(),
        channel_count,
        "encoding RGBA buffer"
    );

    encode_planes(image, out);

    Ok(())
}

/// Unchecked core of the encoder. The image must have at least 3 channels of
/// `pixel_count()` samples and `out` must hold `pixel_count() * 4` bytes.
pub(crate) fn encode_planes<I: PlanarImage + ?Sized>(image: &I, out: &mut [u8]) {
    let r = image.channel(0);
    let g = image.channel(1);
    let b = image.channel(2);

    // One branch per call; each loop below is straight-line per pixel.
    match ChannelLayout::from_channel_count(image.channel_count().min(4)) {
        ChannelLayout::Rgba => encode_with_alpha(r, g, b, image.channel(3), out),
        _ => encode_opaque(r, g, b, out),
    }
}

fn encode_with_alpha(r: &[f32], g: &[f32], b: &[f32], a: &[f32], out: &mut [u8]) {
    let pixels = out.chunks_exact_mut(RGBA_BYTES_PER_PIXEL);
    for ((((px, &red), &green), &blue), &alpha) in pixels.zip(r).zip(g).zip(b).zip(a) {
        px[0] = red.convert();
        px[1] = green.convert();
        px[2] = blue.convert();
        px[3] = alpha.convert();
    }
}

fn encode_opaque(r: &[f32], g: &[f32], b: &[f32], out: &mut [u8]) {
    let pixels = out.chunks_exact_mut(RGBA_BYTES_PER_PIXEL);
    for (((px, &red), &green), &blue) in pixels.zip(r).zip(g).zip(b) {
        px[0] = red.convert();
        px[1] = green.convert();
        px[2] = blue.convert();
        px[3] = u8::opaque_alpha();
    }
}
