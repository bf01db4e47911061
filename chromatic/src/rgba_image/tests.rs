use strum::IntoEnumIterator;

use common::log_setup::init_test_tracing;

use super::*;
use crate::conversion::encode_rgba;

fn planes(width: usize, height: usize, channel_count: usize) -> ChannelImage {
    let pixel_count = width * height;
    let channels: Vec<Vec<f32>> = (0..channel_count)
        .map(|c| {
            (0..pixel_count)
                .map(|p| ((c * 31 + p * 3) % 256) as f32 / 255.0)
                .collect::<Vec<f32>>()
        })
        .collect();
    ChannelImage::from_channels(width, height, channels).unwrap()
}

fn add_one(samples: &mut [f32], _width: usize, _height: usize) {
    for s in samples.iter_mut() {
        *s += 1.0;
    }
}

#[test]
fn new_is_transparent_black() {
    let image = RgbaImage::new(3, 2).unwrap();
    assert_eq!(image.channel_count(), 4);
    for channel in RgbaChannel::iter() {
        assert_eq!(image.plane(channel), &[0.0; 6], "{} not zeroed", channel);
    }
}

#[test]
fn from_image_synthesizes_opaque_alpha() {
    init_test_tracing();

    for channel_count in 1..=3 {
        let source = planes(4, 3, channel_count);
        let image = RgbaImage::from_image(&source).unwrap();

        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 3);
        assert!(
            image.plane(RgbaChannel::Alpha).iter().all(|&a| a == 1.0),
            "alpha not opaque for {}-channel source",
            channel_count
        );
        for c in 0..channel_count {
            assert_eq!(image.channel(c), source.channel(c), "channel {} not copied", c);
        }
        for c in channel_count..3 {
            assert!(
                image.channel(c).iter().all(|&v| v == 0.0),
                "missing color channel {} not black",
                c
            );
        }
    }
}

#[test]
fn from_image_keeps_source_alpha() {
    let source = planes(4, 3, 4);
    let image = RgbaImage::from_image(&source).unwrap();
    assert_eq!(image.as_channel_image(), &source);
    assert_ne!(image.plane(RgbaChannel::Alpha)[0], 1.0);
}

#[test]
fn from_image_drops_channels_past_alpha() {
    init_test_tracing();

    let source = planes(2, 2, 5);
    let image = RgbaImage::from_image(&source).unwrap();
    assert_eq!(image.channel_count(), 4);
    for c in 0..4 {
        assert_eq!(image.channel(c), source.channel(c));
    }
    assert_eq!(image.plane(RgbaChannel::Alpha), source.channel(3));
}

#[test]
fn from_image_copies_instead_of_aliasing() {
    let mut source = planes(2, 1, 4);
    let image = RgbaImage::from_image(&source).unwrap();
    source.channel_mut(0)[0] = 0.5;
    assert_ne!(image.plane(RgbaChannel::Red)[0], 0.5);
}

#[test]
fn from_bytes_decodes_rgba() {
    let image = RgbaImage::from_bytes(&[128, 64, 191, 255], 1, 1).unwrap();
    assert_eq!(image.plane(RgbaChannel::Red), &[128.0 / 255.0]);
    assert_eq!(image.plane(RgbaChannel::Alpha), &[1.0]);
    assert_eq!(image.to_rgba_bytes(), vec![128, 64, 191, 255]);
}

#[test]
fn from_bytes_rejects_wrong_length() {
    let result = RgbaImage::from_bytes(&[0; 6], 1, 2);
    assert_eq!(
        result,
        Err(Error::BufferSize {
            expected: 8,
            actual: 6
        })
    );
}

#[test]
fn to_rgba_bytes_matches_free_encoder() {
    let image = RgbaImage::from_image(&planes(5, 4, 4)).unwrap();
    assert_eq!(image.to_rgba_bytes(), encode_rgba(&image).unwrap());
}

#[test]
fn three_channel_source_encodes_like_rgba_conversion() {
    let source = planes(3, 3, 3);
    let direct = encode_rgba(&source).unwrap();
    let via_rgba = RgbaImage::from_image(&source).unwrap().to_rgba_bytes();
    assert_eq!(direct, via_rgba);
}

#[test]
fn clone_as_rgba_is_independent_copy() {
    let original = RgbaImage::from_image(&planes(3, 2, 4)).unwrap();
    let mut copy = original.clone_as_rgba();
    assert_eq!(copy, original);

    copy.plane_mut(RgbaChannel::Green)[1] = 0.125;
    assert_ne!(copy, original);
}

#[test]
fn clone_stays_rgba() {
    let original = RgbaImage::from_image(&planes(2, 2, 2)).unwrap();
    let copy: RgbaImage = original.clone();
    assert_eq!(copy, original);
}

#[test]
fn base_copy_yields_plain_channel_image() {
    let original = RgbaImage::from_image(&planes(2, 2, 3)).unwrap();
    let base: ChannelImage = original.to_channel_image().unwrap();
    assert_eq!(base.channel_count(), 4);
    assert_eq!(&base, original.as_channel_image());
}

#[test]
fn filter_skips_alpha() {
    let mut image = RgbaImage::from_image(&planes(2, 2, 3)).unwrap();
    let before = image.clone_as_rgba();

    image.filter(&add_one);

    for channel in RgbaChannel::iter() {
        let changed: Vec<f32> = before.plane(channel).iter().map(|v| v + 1.0).collect();
        if channel.is_color() {
            assert_eq!(image.plane(channel), changed.as_slice(), "{} not filtered", channel);
        } else {
            assert_eq!(image.plane(channel), before.plane(channel), "alpha was filtered");
        }
    }
}

#[test]
fn filter_channel_reaches_alpha() {
    let mut image = RgbaImage::new(2, 1).unwrap();
    image
        .filter_channel(&add_one, RgbaChannel::Alpha.index())
        .unwrap();
    assert_eq!(image.plane(RgbaChannel::Alpha), &[1.0, 1.0]);
    assert_eq!(image.plane(RgbaChannel::Red), &[0.0, 0.0]);
}

#[test]
fn filter_channel_rejects_out_of_range_index() {
    let mut image = RgbaImage::new(1, 1).unwrap();
    assert_eq!(
        image.filter_channel(&add_one, 4),
        Err(Error::ChannelIndex {
            index: 4,
            channel_count: 4
        })
    );
}

#[test]
fn rgba_image_pastes_into_larger_canvas() {
    let tile = RgbaImage::from_bytes(&[255, 0, 0, 255], 1, 1).unwrap();
    let mut canvas = ChannelImage::new(2, 1, 4).unwrap();
    canvas.paste_at(&tile, 1, 0).unwrap();
    assert_eq!(encode_rgba(&canvas).unwrap(), vec![0, 0, 0, 0, 255, 0, 0, 255]);
}

#[test]
fn into_channel_image_keeps_planes() {
    let source = planes(2, 3, 4);
    let image = RgbaImage::from_image(&source).unwrap();
    let plain: ChannelImage = image.into();
    assert_eq!(plain, source);
}

#[test]
fn channel_roles_map_to_indices() {
    let indices: Vec<usize> = RgbaChannel::iter().map(RgbaChannel::index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    assert_eq!(RgbaChannel::Alpha.to_string(), "Alpha");
    assert!(!RgbaChannel::Alpha.is_color());
}

#[test]
fn display_shows_dimensions() {
    let image = RgbaImage::new(7, 5).unwrap();
    assert_eq!(image.to_string(), "7x5 RGBA");
}
