//! Benchmarks for interleaved <-> planar conversion.
//! Run with: cargo bench -p chromatic --features bench --bench conversion -- "<pattern>"
//!
//! Examples:
//!   cargo bench -p chromatic --features bench --bench conversion -- "decode"
//!   cargo bench -p chromatic --features bench --bench conversion -- "encode"

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput};

use super::decode::decode_generic;
use super::{decode_planes, encode_rgba, ChannelLayout};
use crate::channel_image::ChannelImage;

const WIDTH: usize = 2048;
const HEIGHT: usize = 2048;

/// Deterministic pattern data for `channel_count` interleaved channels.
fn create_test_bytes(channel_count: usize) -> Vec<u8> {
    (0..WIDTH * HEIGHT * channel_count)
        .map(|i| (i % 256) as u8)
        .collect()
}

fn create_test_image(channel_count: usize) -> ChannelImage {
    let bytes = create_test_bytes(channel_count);
    let planes = decode_generic(&bytes, channel_count);
    ChannelImage::from_channels(WIDTH, HEIGHT, planes).unwrap()
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Elements((WIDTH * HEIGHT) as u64));

    for layout in [ChannelLayout::Rgb, ChannelLayout::Rgba] {
        let channel_count = layout.channel_count();
        let bytes = create_test_bytes(channel_count);

        group.bench_with_input(BenchmarkId::new("fast", layout), &bytes, |b, bytes| {
            b.iter(|| decode_planes(black_box(bytes), layout))
        });
        group.bench_with_input(BenchmarkId::new("generic", layout), &bytes, |b, bytes| {
            b.iter(|| decode_generic(black_box(bytes), channel_count))
        });
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Elements((WIDTH * HEIGHT) as u64));

    for channel_count in [3, 4, 5] {
        let image = create_test_image(channel_count);
        group.bench_with_input(
            BenchmarkId::new("rgba", format!("{}ch", channel_count)),
            &image,
            |b, image| b.iter(|| encode_rgba(black_box(image)).unwrap()),
        );
    }

    group.finish();
}

pub fn benchmarks(c: &mut Criterion) {
    bench_decode(c);
    bench_encode(c);
}
