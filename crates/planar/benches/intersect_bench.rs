//! Criterion benches for segment intersection and triangle equality.
//! Fixed cases cover each branch of the projection; random batches use replay
//! tokens so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use planar::api::{draw_segments, draw_triangle, intersecting_pairs, Bounds2, ReplayToken};
use planar::geom2::{GeomCfg, LineSegment, Point, Triangle};

fn bench_intersects_fixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersects");
    let seg = LineSegment::from_coords;
    let cases = [
        ("crossing", seg(0.0, 0.0, 1.0, 1.0), seg(1.0, 0.0, 0.0, 1.0)),
        ("disjoint", seg(0.0, 0.0, 1.0, 1.0), seg(2.0, 0.0, 3.0, 1.0)),
        ("touching", seg(0.0, 0.0, 0.0, 1.0), seg(1.0, 1.0, 0.0, 1.0)),
        ("collinear overlap", seg(0.0, 0.0, 1.0, 1.0), seg(0.9, 0.9, 1.1, 1.1)),
    ];
    for (name, l1, l2) in cases {
        group.bench_function(BenchmarkId::new("fixed", name), |b| {
            b.iter(|| black_box(l1).intersects(black_box(l2)))
        });
    }
    group.finish();
}

fn bench_intersects_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersecting_pairs");
    let cfg = GeomCfg::default();
    for &n in &[10usize, 50, 100] {
        let segs = draw_segments(n, Bounds2::centered(10.0), ReplayToken::new(42, 0));
        group.throughput(Throughput::Elements((n * (n - 1) / 2) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &segs, |b, segs| {
            b.iter(|| intersecting_pairs(black_box(segs), cfg))
        });
    }
    group.finish();
}

fn bench_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangle");
    let p = Point::new;
    let t = Triangle::new(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0));
    let cases = [
        ("identical", t),
        ("rotated", Triangle::new(p(0.0, 1.0), p(0.0, 0.0), p(1.0, 0.0))),
        ("last permutation", Triangle::new(p(0.0, 1.0), p(1.0, 0.0), p(0.0, 0.0))),
    ];
    for (name, u) in cases {
        group.bench_function(BenchmarkId::new("equals", name), |b| {
            b.iter(|| black_box(t).equals(&black_box(u)))
        });
    }
    let random = draw_triangle(Bounds2::centered(100.0), ReplayToken::new(7, 3));
    group.bench_function("area", |b| b.iter(|| black_box(random).area()));
    group.finish();
}

criterion_group!(
    benches,
    bench_intersects_fixed,
    bench_intersects_random,
    bench_triangle
);
criterion_main!(benches);
