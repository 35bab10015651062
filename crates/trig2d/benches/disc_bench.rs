//! Criterion benchmarks for the bearing and disc kernels.
//! Both are O(1); the sweep over draw granularities checks that the
//! integer-draw path does not dominate the trigonometry.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::Vector2;
use rand::{rngs::StdRng, SeedableRng};
use trig2d::bearing::point_in_front;
use trig2d::disc::{point_in_disc_with, DiscCfg};

fn bench_bearing(c: &mut Criterion) {
    let mut group = c.benchmark_group("bearing");
    group.bench_function("point_in_front", |b| {
        let position = Vector2::new(1500.0, -320.0);
        let mut angle = 0.0f64;
        b.iter(|| {
            angle = (angle + 7.3) % 360.0;
            point_in_front(position, angle, 30.0)
        })
    });
    group.finish();
}

fn bench_disc(c: &mut Criterion) {
    let mut group = c.benchmark_group("disc");
    for &steps in &[1_000u32, 1_000_000] {
        group.bench_with_input(BenchmarkId::new("point_in_disc", steps), &steps, |b, &steps| {
            let cfg = DiscCfg { steps };
            let center = Vector2::new(0.0, 0.0);
            let mut rng = StdRng::seed_from_u64(43);
            b.iter(|| point_in_disc_with(cfg, center, 25.0, &mut rng))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_bearing, bench_disc);
criterion_main!(benches);
