//! Benchmarks for the terrain generation pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use relief_color::presets;
use relief_noise::{Fbm, Perlin};
use relief_terrain::{TerrainBuilder, TerrainConfig};

fn bench_generate(c: &mut Criterion) {
    let noise = Perlin::with_seed(7);
    let gradient = presets::elevation();

    for cells in [32usize, 128] {
        c.bench_function(&format!("generate_{}x{}", cells, cells), |b| {
            let config = TerrainConfig {
                width: cells,
                depth: cells,
                ..Default::default()
            };
            b.iter(|| {
                TerrainBuilder::new(black_box(config))
                    .noise(&noise)
                    .gradient(&gradient)
                    .generate()
                    .unwrap()
            });
        });
    }
}

fn bench_generate_fbm(c: &mut Criterion) {
    let noise = Fbm::new(Perlin::with_seed(7)).octaves(5);
    let gradient = presets::elevation();

    c.bench_function("generate_128x128_fbm5", |b| {
        let config = TerrainConfig {
            width: 128,
            depth: 128,
            ..Default::default()
        };
        b.iter(|| {
            TerrainBuilder::new(black_box(config))
                .noise(&noise)
                .gradient(&gradient)
                .generate()
                .unwrap()
        });
    });
}

fn bench_smooth_normals(c: &mut Criterion) {
    let noise = Perlin::with_seed(7);
    let gradient = presets::elevation();
    let config = TerrainConfig {
        width: 128,
        depth: 128,
        ..Default::default()
    };
    let surface = TerrainBuilder::new(config)
        .noise(&noise)
        .gradient(&gradient)
        .generate()
        .unwrap();

    c.bench_function("smooth_normals_128x128", |b| {
        b.iter(|| {
            let mut mesh = surface.mesh().clone();
            mesh.compute_smooth_normals();
            black_box(mesh)
        });
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_generate_fbm,
    bench_smooth_normals
);
criterion_main!(benches);
