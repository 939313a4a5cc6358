mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hex_scarcity::prelude::{layout_coordinates, project_coord, BoardShape};

const RADII: [i32; 5] = [3, 8, 16, 32, 64];

fn layout_radius_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/radius");

    for &radius in &RADII {
        let shape = BoardShape::hexagon(radius);
        let expected = shape.tile_count().unwrap_or(0);
        group.throughput(common::elements_throughput(expected));

        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, _| {
            b.iter(|| {
                let coords = layout_coordinates(&shape).expect("valid shape");
                black_box(coords.len());
            });
        });
    }

    group.finish();
}

fn projection_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/project");

    for &radius in &RADII {
        let coords = layout_coordinates(&BoardShape::hexagon(radius)).expect("valid shape");
        group.throughput(common::elements_throughput(coords.len()));

        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, _| {
            b.iter(|| {
                let sum = coords
                    .iter()
                    .map(|c| project_coord(*c))
                    .fold(0.0, |acc, p| acc + p.x + p.y);
                black_box(sum);
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = layout_radius_benches, projection_benches
}
criterion_main!(benches);
