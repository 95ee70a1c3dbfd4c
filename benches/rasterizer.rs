use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use softrast::bench::{FrameBuffer, ProjectedVertex, ScanlineRasterizer};
use softrast::colors::{BLACK, WHITE};
use softrast::math::vec3::Vec3;
use softrast::{Camera, Device, Face, Mesh, RenderSettings, Vertex};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn small_triangle() -> [ProjectedVertex; 3] {
    [
        ProjectedVertex::at(100.0, 100.0, 0.5),
        ProjectedVertex::at(120.0, 100.0, 0.5),
        ProjectedVertex::at(110.0, 120.0, 0.5),
    ]
}

fn medium_triangle() -> [ProjectedVertex; 3] {
    [
        ProjectedVertex::at(100.0, 100.0, 0.5),
        ProjectedVertex::at(300.0, 100.0, 0.5),
        ProjectedVertex::at(200.0, 300.0, 0.5),
    ]
}

fn large_triangle() -> [ProjectedVertex; 3] {
    [
        ProjectedVertex::at(50.0, 50.0, 0.5),
        ProjectedVertex::at(750.0, 100.0, 0.5),
        ProjectedVertex::at(400.0, 550.0, 0.5),
    ]
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");
    let scanline = ScanlineRasterizer::new();

    for (name, triangle) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("scanline", name), &triangle, |b, tri| {
            let mut fb = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            b.iter(|| {
                fb.clear(BLACK);
                let mut band = fb.full_band();
                scanline.draw_triangle(
                    black_box(&tri[0]),
                    black_box(&tri[1]),
                    black_box(&tri[2]),
                    WHITE,
                    &mut band,
                );
            });
        });
    }

    group.finish();
}

/// A `cells` x `cells` grid of quads in the z = 0 plane, two faces each.
fn grid_mesh(cells: usize) -> Mesh {
    let step = 4.0 / cells as f32;
    let normal = Vec3::new(0.0, 0.0, 1.0);

    let mut vertices = Vec::new();
    for row in 0..=cells {
        for col in 0..=cells {
            let x = -2.0 + col as f32 * step;
            let y = -2.0 + row as f32 * step;
            vertices.push(Vertex::new(Vec3::new(x, y, 0.0), normal));
        }
    }

    let stride = cells + 1;
    let mut faces = Vec::new();
    for row in 0..cells {
        for col in 0..cells {
            let i = row * stride + col;
            faces.push(Face::new(i, i + 1, i + stride + 1));
            faces.push(Face::new(i, i + stride + 1, i + stride));
        }
    }

    Mesh::new("grid", vertices, faces).unwrap()
}

fn benchmark_device_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("device_render");
    let meshes = [grid_mesh(32)];
    let camera = Camera::default();

    for band_rows in [8, 32, BUFFER_HEIGHT] {
        let settings = RenderSettings::default().with_band_rows(band_rows);
        group.bench_with_input(
            BenchmarkId::new("grid_2048_faces", band_rows),
            &settings,
            |b, settings| {
                let mut device = Device::with_settings(BUFFER_WIDTH, BUFFER_HEIGHT, *settings);
                b.iter(|| {
                    device.clear(BLACK);
                    device.render(&camera, black_box(&meshes));
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_single_triangle, benchmark_device_render);
criterion_main!(benches);
