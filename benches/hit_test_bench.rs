#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use facecube::camera::core::{Camera, Viewport};
use facecube::options::CameraOptions;
use facecube::picking::{hit_test, HitTarget};
use facecube::scene::{Mesh, Orientation};
use glam::Vec2;

const VIEWPORT: Viewport = Viewport::new(1280, 720);

fn hit_test_benchmark(c: &mut Criterion) {
    let camera = Camera::looking_at_origin(
        &CameraOptions::default(),
        6.0,
        VIEWPORT.aspect(),
    );
    let cube = Mesh::cuboid(2.5);
    let target = HitTarget {
        mesh: &cube,
        model: Orientation::new(0.3, 0.7).to_matrix(),
        face_count: 6,
    };

    let mut group = c.benchmark_group("hit_test");
    group.bench_function("center", |b| {
        b.iter(|| {
            black_box(hit_test(
                black_box(Vec2::new(640.0, 360.0)),
                VIEWPORT,
                &camera,
                &target,
            ))
        });
    });
    group.bench_function("miss", |b| {
        b.iter(|| {
            black_box(hit_test(
                black_box(Vec2::new(5.0, 5.0)),
                VIEWPORT,
                &camera,
                &target,
            ))
        });
    });
    group.finish();
}

fn mesh_build_benchmark(c: &mut Criterion) {
    c.bench_function("icosphere_detail_2", |b| {
        b.iter(|| black_box(Mesh::icosphere(black_box(1.5), 2)));
    });
}

criterion_group!(benches, hit_test_benchmark, mesh_build_benchmark);
criterion_main!(benches);
