//! Benchmarks for FEIGEN map iteration and analysis

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use feigen_analysis::BifurcationAnalyzer;
use feigen_core::{DynamicalSystem, Point2};
use feigen_maps::{HenonHeilesMap, LogisticMap};

fn bench_logistic_iterate(c: &mut Criterion) {
    let mut map = LogisticMap::seeded(0.4, 3.8);
    c.bench_function("logistic_iterate", |b| b.iter(|| black_box(map.iterate())));
}

fn bench_henon_iterate(c: &mut Criterion) {
    let mut map = HenonHeilesMap::seeded(Point2::new(0.1, 0.1));
    c.bench_function("henon_iterate", |b| b.iter(|| black_box(map.iterate())));
}

fn bench_bifurcation_sweep(c: &mut Criterion) {
    let sweep: Vec<f64> = (0..10).map(|i| 2.9 + i as f64 * 0.1).collect();

    c.bench_function("bifurcation_sweep_10", |b| {
        b.iter(|| {
            let mut analyzer = BifurcationAnalyzer::new(LogisticMap::seeded(0.5, 3.8));
            black_box(analyzer.analyze(&sweep))
        })
    });
}

criterion_group!(
    benches,
    bench_logistic_iterate,
    bench_henon_iterate,
    bench_bifurcation_sweep
);
criterion_main!(benches);
