//! Benchmarks for plane geometry and buffer sizing
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tj_core::Subsampling;
use tj_yuv::{jpeg_buf_size, plane_width, yuv_buf_size, Component, YuvLayout};

fn bench_plane_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("Plane Geometry");

    group.bench_function("plane_width_all_modes", |b| {
        b.iter(|| {
            for mode in Subsampling::ALL {
                for component in Component::ALL {
                    let _w = plane_width(black_box(component), black_box(1921), mode);
                }
            }
        });
    });

    for &(width, height) in &[(640usize, 480usize), (1920, 1080), (7680, 4320)] {
        group.bench_with_input(
            BenchmarkId::new("yuv_buf_size_420", width),
            &(width, height),
            |b, &(w, h)| {
                b.iter(|| yuv_buf_size(black_box(w), black_box(64), black_box(h), Subsampling::S420));
            },
        );
    }

    group.bench_function("yuv_layout_422", |b| {
        b.iter(|| YuvLayout::new(black_box(1920), black_box(32), black_box(1080), Subsampling::S422));
    });

    group.finish();
}

fn bench_jpeg_bound(c: &mut Criterion) {
    let mut group = c.benchmark_group("JPEG Buffer Bound");

    group.bench_function("jpeg_buf_size_all_modes", |b| {
        b.iter(|| {
            for mode in Subsampling::ALL {
                let _size = jpeg_buf_size(black_box(4000), black_box(3000), mode);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_plane_geometry, bench_jpeg_bound);
criterion_main!(benches);
