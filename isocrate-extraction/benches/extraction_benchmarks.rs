//! Benchmarks comparing sequential and sharded marching tetrahedra

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use isocrate_core::Point3f;
use isocrate_extraction::fields::{sphere_volume, HydrogenOrbital};
use isocrate_extraction::{ExtractionConfig, MarchingTetrahedra, ParallelConfig, Volume};

fn bench_extraction(c: &mut Criterion) {
    let sizes = [32, 64, 96];

    let mut group = c.benchmark_group("extraction");
    group.sample_size(20);

    for &size in &sizes {
        let volumes: [(&str, Volume); 2] = [
            ("hydrogen", HydrogenOrbital::new(size).unwrap().generate()),
            (
                "sphere",
                sphere_volume([size; 3], Point3f::new(0.5, 0.5, 0.5), 0.4),
            ),
        ];

        for (name, volume) in &volumes {
            let config = if *name == "hydrogen" {
                ExtractionConfig::normalized(0.05)
            } else {
                ExtractionConfig::absolute(0.0)
            };

            group.bench_with_input(
                BenchmarkId::new(format!("{}_sequential", name), size),
                volume,
                |b, volume| {
                    let extractor = MarchingTetrahedra::new(config);
                    b.iter(|| {
                        let mesh = extractor.extract(black_box(volume)).unwrap();
                        black_box(mesh);
                    });
                },
            );

            group.bench_with_input(
                BenchmarkId::new(format!("{}_sharded", name), size),
                volume,
                |b, volume| {
                    let extractor =
                        MarchingTetrahedra::new(config.with_parallel(ParallelConfig::default()));
                    b.iter(|| {
                        let mesh = extractor.extract(black_box(volume)).unwrap();
                        black_box(mesh);
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_orbital_generation(c: &mut Criterion) {
    c.bench_function("hydrogen_generate_64", |b| {
        let orbital = HydrogenOrbital::new(64).unwrap();
        b.iter(|| black_box(orbital.generate()));
    });
}

criterion_group!(benches, bench_extraction, bench_orbital_generation);
criterion_main!(benches);
