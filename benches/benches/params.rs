//! Benchmarks for parameter lowering

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tj_core::Subsampling;
use tj_params::{CompressOptions, Param, ParamSet, RestartInterval};

fn bench_params(c: &mut Criterion) {
    let mut group = c.benchmark_group("Parameters");

    let options = CompressOptions::new()
        .quality(85)
        .subsampling(Subsampling::S420)
        .progressive(true)
        .restart(RestartInterval::Rows(4));

    group.bench_function("compress_to_params", |b| {
        b.iter(|| black_box(&options).to_params());
    });

    group.bench_function("set_by_id", |b| {
        b.iter(|| {
            let mut params = ParamSet::new();
            for id in 0..26 {
                let _ = params.set_id(black_box(id), 1);
            }
            params.get(Param::RestartRows)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_params);
criterion_main!(benches);
