use chromasync::{hex, hsv_to_rgb, rgb_to_hsv, Argb};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

pub fn bench_rgb_to_hsv(c: &mut Criterion) {
    let mut group = c.benchmark_group("rgb_to_hsv");

    for step in [1_u8, 15, 51].iter() {
        group.bench_with_input(BenchmarkId::new("channel_step", step), step, |b, &step| {
            b.iter(|| {
                for red in (0..=255_u8).step_by(step as usize) {
                    for green in (0..=255_u8).step_by(step as usize) {
                        black_box(rgb_to_hsv(red, green, black_box(128)));
                    }
                }
            });
        });
    }

    group.finish();
}

pub fn bench_hsv_to_rgb(c: &mut Criterion) {
    let mut group = c.benchmark_group("hsv_to_rgb");

    group.bench_function("hue_sweep", |b| {
        b.iter(|| {
            for degrees in 0..360 {
                black_box(hsv_to_rgb(degrees as f64, black_box(0.75), 0.5, 0xFF));
            }
        });
    });

    group.finish();
}

pub fn bench_hex(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex");
    let color = Argb::new(0x80, 0x10, 0x20, 0x30);

    group.bench_function("format", |b| {
        b.iter(|| black_box(hex::format(black_box(Some(color)), true)));
    });

    for text in ["80102030", "ABC", "FFGG0000"].iter() {
        group.bench_with_input(BenchmarkId::new("parse", text), text, |b, text| {
            b.iter(|| black_box(hex::parse(black_box(text)).is_ok()));
        });
    }

    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .sample_size(100)
        .measurement_time(Duration::from_secs(5));
    targets = bench_rgb_to_hsv, bench_hsv_to_rgb, bench_hex
);
criterion_main!(benches);
