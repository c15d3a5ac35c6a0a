use criterion::{Criterion, black_box, criterion_group, criterion_main};

use roadgrid_core::algo::clip::clip_path;
use roadgrid_core::model::{Path, PlanarPoint, Polygon};

/// Long sinusoidal path weaving in and out of a square boundary, the
/// worst case for the clipper (many transitions).
fn weaving_path(points: usize) -> Path {
    let points = (0..points)
        .map(|i| {
            let x = i as f64 * 0.5;
            let y = 500.0 + 600.0 * (i as f64 * 0.01).sin();
            PlanarPoint::new(x, y)
        })
        .collect();
    Path {
        points,
        category: "primary".to_string(),
        weight: 12.0,
    }
}

fn bench_clip(c: &mut Criterion) {
    let polygon = Polygon::new(vec![
        PlanarPoint::new(0.0, 0.0),
        PlanarPoint::new(5000.0, 0.0),
        PlanarPoint::new(5000.0, 1000.0),
        PlanarPoint::new(0.0, 1000.0),
    ])
    .unwrap();
    let path = weaving_path(10_000);

    c.bench_function("clip_path_10k_points", |b| {
        b.iter(|| clip_path(black_box(&path), black_box(&polygon)));
    });
}

criterion_group!(benches, bench_clip);
criterion_main!(benches);
