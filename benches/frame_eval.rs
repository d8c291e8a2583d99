//! Benchmarks for per-frame swarm evaluation.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use murmuration::prelude::*;

fn bench_frame_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_eval");
    let spec = CanvasSpec::default();

    let leaf = Swarm::new(Leafaproxus);
    group.bench_function("leafaproxus", |b| {
        let mapping = ColorMapping::Radial { distance: 0.7, angle: 0.3 };
        b.iter(|| black_box(leaf.evaluate(black_box(1.0), mapping, spec)))
    });

    let rain = Swarm::new(Pluviophile);
    group.bench_function("pluviophile", |b| {
        let mapping = ColorMapping::Drift { distance: 0.7, angle: 0.3, rate: 0.05 };
        b.iter(|| black_box(rain.evaluate(black_box(1.0), mapping, spec)))
    });

    let shrimp = Swarm::new(Shrimpam);
    group.bench_function("shrimpam", |b| {
        let mapping = ColorMapping::Radial { distance: 0.6, angle: 0.4 };
        b.iter(|| black_box(shrimp.evaluate(black_box(1.0), mapping, spec)))
    });

    group.finish();
}

fn bench_palette_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("palette_sample");

    for (name, palette) in [
        ("thermal", Palette::Thermal),
        ("twilight", Palette::Twilight),
        ("ember", Palette::Ember),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut acc = Vec3::ZERO;
                for i in 0..1000 {
                    acc += palette.sample(black_box(i as f32 / 1000.0));
                }
                black_box(acc)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_frame_eval, bench_palette_sample);
criterion_main!(benches);
