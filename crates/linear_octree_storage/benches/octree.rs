use linear_octree_storage::prelude::*;
use utilities::data_sets::sphere_cell_codes;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn octree_set_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("octree_set_sphere");
    for depth in [4, 5, 6].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, &depth| {
            b.iter_with_setup(
                || sphere_cell_codes::<u32>(depth),
                |cells| {
                    let mut octree = Octree32::new_empty();
                    for cell in cells {
                        octree.set(cell);
                    }

                    octree
                },
            );
        });
    }
    group.finish();
}

fn octree_clear_sphere_from_full(c: &mut Criterion) {
    let mut group = c.benchmark_group("octree_clear_sphere_from_full");
    for depth in [4, 5, 6].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, &depth| {
            b.iter_with_setup(
                || sphere_cell_codes::<u32>(depth),
                |cells| {
                    let mut octree = Octree32::new_full();
                    for cell in cells {
                        octree.clear(cell);
                    }

                    octree
                },
            );
        });
    }
    group.finish();
}

fn octree_volume_of_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("octree_volume_of_sphere");
    for depth in [4, 5, 6].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, &depth| {
            b.iter_with_setup(
                || {
                    let mut octree = Octree32::new_empty();
                    for cell in sphere_cell_codes::<u32>(depth) {
                        octree.set(cell);
                    }

                    octree
                },
                |octree| black_box(octree.volume()),
            );
        });
    }
    group.finish();
}

fn octree_visit_filled_octants_of_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("octree_visit_filled_octants_of_sphere");
    for depth in [4, 5, 6].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, &depth| {
            b.iter_with_setup(
                || {
                    let mut octree = Octree32::new_empty();
                    for cell in sphere_cell_codes::<u32>(depth) {
                        octree.set(cell);
                    }

                    octree
                },
                |octree| {
                    octree.visit_filled_octants(|code, octant| {
                        black_box((code, octant));
                    })
                },
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    octree_set_sphere,
    octree_clear_sphere_from_full,
    octree_volume_of_sphere,
    octree_visit_filled_octants_of_sphere
);
criterion_main!(benches);
