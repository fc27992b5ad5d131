use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flycam::camera::{Camera, CameraUniform, MoveDirection};
use glam::{Vec2, Vec3};

fn view_projection_benchmark(c: &mut Criterion) {
    let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0), -90.0, 0.0, 800.0 / 600.0);
    c.bench_function("view_projection", |b| {
        b.iter(|| black_box(black_box(&camera).view_projection()))
    });
}

fn look_update_benchmark(c: &mut Criterion) {
    let mut camera = Camera::default();
    c.bench_function("look_update", |b| {
        b.iter(|| camera.look(black_box(Vec2::new(3.1, -1.2))))
    });
}

fn frame_step_benchmark(c: &mut Criterion) {
    let mut camera = Camera::default();
    let mut uniform = CameraUniform::new();
    c.bench_function("frame_step", |b| {
        b.iter(|| {
            camera.look(black_box(Vec2::new(0.7, 0.2)));
            camera.advance(MoveDirection::Forward, black_box(2.5 / 60.0));
            uniform.update_view_proj(&camera);
            black_box(uniform.view_proj)
        })
    });
}

criterion_group!(
    benches,
    view_projection_benchmark,
    look_update_benchmark,
    frame_step_benchmark
);
criterion_main!(benches);
