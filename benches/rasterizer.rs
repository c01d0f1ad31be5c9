use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rastrum::bench::fill_triangle;
use rastrum::math::Vec4;
use rastrum::{Camera, Color, FrameBuffer, Mesh, Projection, Rasterizer, Scene};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn screen_triangle(points: [(f64, f64); 3]) -> [Vec4; 3] {
    points.map(|(x, y)| Vec4::point(x, y, 0.0))
}

fn small_triangle() -> [Vec4; 3] {
    screen_triangle([(100.0, 100.0), (120.0, 100.0), (110.0, 120.0)])
}

fn medium_triangle() -> [Vec4; 3] {
    screen_triangle([(100.0, 100.0), (300.0, 100.0), (200.0, 300.0)])
}

fn large_triangle() -> [Vec4; 3] {
    screen_triangle([(50.0, 50.0), (750.0, 100.0), (400.0, 550.0)])
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    for (name, triangle) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(
            BenchmarkId::new("edge_function", name),
            &triangle,
            |b, &[v0, v1, v2]| {
                let mut fb = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
                b.iter(|| {
                    fill_triangle(black_box(v0), black_box(v1), black_box(v2), &mut fb, Color::FILL)
                });
            },
        );
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");

    // Generate a grid of small triangles
    let triangles: Vec<[Vec4; 3]> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col as f64 * 40.0;
                let y = row as f64 * 30.0;
                screen_triangle([(x, y), (x + 35.0, y), (x + 17.5, y + 25.0)])
            })
        })
        .collect();

    group.bench_function("edge_function_400_triangles", |b| {
        let mut fb = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
        b.iter(|| {
            for &[v0, v1, v2] in &triangles {
                fill_triangle(black_box(v0), v1, v2, &mut fb, Color::FILL);
            }
        });
    });

    group.finish();
}

fn benchmark_render_cube(c: &mut Criterion) {
    let camera = Camera::new(
        Vec4::point(3.0, 2.0, 5.0),
        Vec4::point(0.0, 0.0, 0.0),
        Vec4::direction(0.0, 1.0, 0.0),
    )
    .with_projection(Projection::perspective(
        60.0,
        BUFFER_WIDTH as f64 / BUFFER_HEIGHT as f64,
        -0.1,
        -100.0,
    ));
    let scene = Scene::new(Mesh::cube(), camera);
    let rasterizer = Rasterizer::new(BUFFER_WIDTH as f64, BUFFER_HEIGHT as f64)
        .expect("benchmark size is valid");

    c.bench_function("render_cube", |b| {
        b.iter(|| rasterizer.render(black_box(&scene)))
    });
}

criterion_group!(
    benches,
    benchmark_single_triangle,
    benchmark_many_triangles,
    benchmark_render_cube
);
criterion_main!(benches);
