use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use magnetostatics::fields::prism_field_strength;
use magnetostatics::math::{R2, R3};
use magnetostatics::placement::{PlacedMagnet2, Placement2};
use magnetostatics::superposition::{field_map, field_map_par};
use magnetostatics::{Magnet, Shape};

fn bench_prism(c: &mut Criterion) {
    let half = R3::new(0.003_175, 0.003_175, 0.003_175);
    let p = R3::new(0.004, -0.002, 0.0127);
    c.bench_function("prism_field_strength", |b| {
        b.iter(|| prism_field_strength(black_box(&p), black_box(&half), 1.0))
    });
}

fn bench_field_map(c: &mut Criterion) {
    let cube = Magnet::new(Shape::cube(0.00635).expect("valid cube"), 1.05);
    let magnets: Vec<PlacedMagnet2> = (0..8)
        .map(|i| {
            let angle = 45.0 * f64::from(i);
            PlacedMagnet2::new(cube, Placement2::new(magnetostatics::math::rotate2(&R2::new(0.05, 0.0), angle), angle))
        })
        .collect();
    let points: Vec<R2> = (0..10_000)
        .map(|i| {
            let t = f64::from(i) * 1.0e-4;
            R2::new(0.02 * t.cos(), 0.02 * t.sin())
        })
        .collect();

    let mut group = c.benchmark_group("field_map");
    group.bench_function(BenchmarkId::new("sequential", points.len()), |b| {
        b.iter(|| field_map(&magnets, &points))
    });
    group.bench_function(BenchmarkId::new("parallel", points.len()), |b| {
        b.iter(|| field_map_par(&magnets, &points))
    });
    group.finish();
}

criterion_group!(benches, bench_prism, bench_field_map);
criterion_main!(benches);
