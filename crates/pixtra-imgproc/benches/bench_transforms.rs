use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use pixtra_image::{Image, ImageSize};
use pixtra_imgproc::{enhance, threshold, warp};

fn bench_transforms(c: &mut Criterion) {
    let size = ImageSize {
        width: 512,
        height: 512,
    };

    let rgb_data: Vec<u8> = (0..size.width * size.height * 3)
        .map(|i| (i % 256) as u8)
        .collect();
    let rgb = Image::<u8, 3>::new(size, rgb_data).unwrap();

    let gray_data: Vec<u8> = (0..size.width * size.height)
        .map(|i| (i % 256) as u8)
        .collect();
    let gray = Image::<u8, 1>::new(size, gray_data).unwrap();

    let mut group = c.benchmark_group("transforms_512");

    group.bench_function("threshold_binary", |b| {
        b.iter(|| threshold::threshold_binary(black_box(&gray), 128).unwrap())
    });

    group.bench_function("adjust_brightness", |b| {
        b.iter(|| enhance::adjust_brightness(black_box(&rgb), 120).unwrap())
    });

    group.bench_function("translate", |b| {
        b.iter(|| warp::translate(black_box(&rgb), 30, -30).unwrap())
    });

    group.bench_function("rotate", |b| {
        b.iter(|| warp::rotate(black_box(&rgb), 70.0, None).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_transforms);
criterion_main!(benches);
