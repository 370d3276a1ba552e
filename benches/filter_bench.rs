// Filter Benchmarks
// Performance benchmarks for frame ingestion and the scaling filters

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use nds_video::video::{pack_rgb555, VideoPipeline, FRAME_PIXELS};
use nds_video::FilterKind;

/// Helper to build a full native frame with some channel variation
fn bench_frame() -> Vec<u16> {
    (0..FRAME_PIXELS)
        .map(|i| pack_rgb555((i % 32) as u16, ((i / 32) % 32) as u16, ((i / 7) % 32) as u16))
        .collect()
}

/// Benchmark the producer path: full-frame RGB555 -> RGBA8888 conversion
fn bench_ingest(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingest");

    let pipeline = VideoPipeline::new();
    let frame = bench_frame();
    group.bench_function("convert_full_frame", |b| {
        b.iter(|| pipeline.ingest_frame(black_box(&frame)));
    });

    group.finish();
}

/// Benchmark the consumer path per filter: swap plus one filter pass
fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("swap_and_filter");
    group.sample_size(20); // Reduce sample size for the large outputs

    let frame = bench_frame();
    let kinds = [
        FilterKind::None,
        FilterKind::Nearest1Point5,
        FilterKind::Nearest2x,
        FilterKind::Scanline,
        FilterKind::Bilinear,
        FilterKind::Epx,
        FilterKind::Nearest5x,
    ];

    for kind in kinds {
        let pipeline = VideoPipeline::new();
        pipeline.set_filter(kind);
        pipeline.ingest_frame(&frame);

        group.bench_function(kind.entry().name, |b| {
            b.iter(|| {
                let output = pipeline.swap_and_filter();
                black_box(output.pixels[0]);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ingest, bench_filters);
criterion_main!(benches);
