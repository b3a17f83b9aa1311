use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use curve_normals_editor::{project, spaced_points, CubicBezier};
use glam::Vec2;
use std::hint::black_box;

fn demo_curve() -> CubicBezier {
    CubicBezier::new(
        Vec2::new(50.0, 50.0),
        Vec2::new(100.0, 300.0),
        Vec2::new(200.0, 100.0),
        Vec2::new(500.0, 500.0),
    )
}

fn build_query_points(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = (i % 500) as f32 + 0.37;
            let y = ((i * 7) % 500) as f32 + 0.63;
            Vec2::new(x, y)
        })
        .collect()
}

fn bench_arc_length_sampling(c: &mut Criterion) {
    let curve = demo_curve();
    let mut group = c.benchmark_group("arc_length_sampling");

    for &segment_count in &[10usize, 100usize] {
        group.bench_with_input(
            BenchmarkId::new("spaced_points", segment_count),
            &segment_count,
            |b, &n| {
                b.iter(|| {
                    let points = spaced_points(black_box(&curve), black_box(n));
                    black_box(points.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_nearest_point_projection(c: &mut Criterion) {
    let curve = demo_curve();
    let query_points = build_query_points(1024);
    let mut group = c.benchmark_group("nearest_point_projection");

    for &scan_samples in &[100usize, 1000usize] {
        group.bench_with_input(
            BenchmarkId::new("project_batch", scan_samples),
            &scan_samples,
            |b, &scan| {
                b.iter(|| {
                    let mut total = 0.0f32;
                    for point in &query_points {
                        let p = project(black_box(&curve), black_box(*point), scan);
                        total += p.t;
                    }
                    black_box(total)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    core_benches,
    bench_arc_length_sampling,
    bench_nearest_point_projection
);
criterion_main!(core_benches);
