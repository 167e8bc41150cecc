// File: crates/axis-core/benches/auto_lim_bench.rs
// Summary: Throughput of the axis search over ranges of varied magnitude and sign.

use axis_core::{auto_lim, Extent};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_ranges(n: usize) -> Vec<(f64, f64)> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        let scale = 10f64.powi((i % 9) as i32 - 4);
        let lo = ((i as f64) * 0.37).sin() * 50.0 * scale;
        let hi = lo + (1.0 + (i % 17) as f64) * 3.3 * scale;
        v.push((hi, lo));
    }
    v
}

fn bench_auto_lim(c: &mut Criterion) {
    let mut group = c.benchmark_group("auto_lim");
    let ranges = gen_ranges(10_000);
    for &splits in &[4usize, 5usize] {
        for &deviation in &[false, true] {
            let id = format!("s{splits}_dev{deviation}");
            group.bench_with_input(BenchmarkId::from_parameter(id), &(splits, deviation), |b, &(s, d)| {
                b.iter(|| {
                    for &(hi, lo) in &ranges {
                        let _ = black_box(auto_lim(hi, lo, s, d));
                    }
                });
            });
        }
    }
    group.finish();
}

fn bench_extent(c: &mut Criterion) {
    let samples: Vec<f64> = (0..100_000).map(|i| (i as f64 * 0.01).sin() * 120.0).collect();
    c.bench_function("extent_then_scale_100k", |b| {
        b.iter(|| {
            let extent = Extent::from_values(black_box(&samples).iter().copied());
            extent.map(|e| auto_lim(e.max, e.min, 4, false))
        });
    });
}

criterion_group!(benches, bench_auto_lim, bench_extent);
criterion_main!(benches);
