use criterion::{black_box, criterion_group, criterion_main, Criterion};

use glam::{Mat4, Vec3};
use viewcull::{Aabb, Frustum};

fn camera_frustum() -> Frustum {
    let proj = Mat4::perspective_rh(std::f32::consts::FRAC_PI_3, 16.0 / 9.0, 0.1, 1000.0);
    let view = Mat4::look_at_rh(Vec3::new(0.0, 50.0, 0.0), Vec3::new(0.0, 0.0, -100.0), Vec3::Y);
    Frustum::from_view_projection(&(proj * view))
}

/// 16x16x16 grid of chunk centers around the camera
fn scene_centers() -> Vec<Vec3> {
    let mut centers = Vec::with_capacity(16 * 16 * 16);
    for x in -8..8i32 {
        for y in -8..8i32 {
            for z in -8..8i32 {
                centers.push(Vec3::new(x as f32, y as f32, z as f32) * 32.0);
            }
        }
    }
    centers
}

fn bench_extract(c: &mut Criterion) {
    let proj = Mat4::perspective_rh(std::f32::consts::FRAC_PI_3, 16.0 / 9.0, 0.1, 1000.0);

    c.bench_function("extract_planes", |b| {
        b.iter(|| Frustum::from_view_projection(black_box(&proj)));
    });
}

fn bench_point_culling(c: &mut Criterion) {
    let frustum = camera_frustum();
    let centers = scene_centers();

    c.bench_function("cull_4096_points", |b| {
        b.iter(|| {
            centers
                .iter()
                .filter(|&&p| frustum.contains_point(black_box(p)))
                .count()
        });
    });
}

fn bench_sphere_culling(c: &mut Criterion) {
    let frustum = camera_frustum();
    let centers = scene_centers();

    c.bench_function("cull_4096_spheres", |b| {
        b.iter(|| {
            centers
                .iter()
                .filter(|&&p| frustum.intersects_sphere(black_box(p), 28.0))
                .count()
        });
    });
}

fn bench_aabb_culling(c: &mut Criterion) {
    let frustum = camera_frustum();
    let boxes: Vec<Aabb> = scene_centers()
        .iter()
        .map(|&p| Aabb::from_center_half_extent(p, Vec3::splat(16.0)))
        .collect();

    c.bench_function("cull_4096_aabbs", |b| {
        b.iter(|| {
            boxes
                .iter()
                .filter(|aabb| frustum.intersects_aabb(black_box(aabb)))
                .count()
        });
    });
}

criterion_group!(
    benches,
    bench_extract,
    bench_point_culling,
    bench_sphere_culling,
    bench_aabb_culling
);
criterion_main!(benches);
