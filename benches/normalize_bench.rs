use criterion::{Criterion, black_box, criterion_group, criterion_main};

use forage_map::geometry::bounds::BoundingBox;
use forage_map::geometry::normalize::normalize_geometry;
use serde_json::{Value, json};

// Lat-first ring of `n` vertices, left open
fn open_ring(n: usize) -> Value {
    let ring: Vec<[f64; 2]> = (0..n)
        .map(|i| {
            let angle = (i as f64 / n as f64) * std::f64::consts::TAU;
            [45.0 + 0.1 * angle.sin(), -110.0 + 0.1 * angle.cos()]
        })
        .collect();
    json!({"type": "Polygon", "coordinates": [ring]})
}

fn bench_normalize_polygon(c: &mut Criterion) {
    let polygon = open_ring(1_000);

    c.bench_function("normalize_polygon_1k_vertices", |b| {
        b.iter(|| {
            let normalized = normalize_geometry(black_box(&polygon));
            black_box(normalized.unwrap());
        })
    });
}

fn bench_bounds_polygon(c: &mut Criterion) {
    let polygon = normalize_geometry(&open_ring(10_000)).unwrap();

    c.bench_function("bounds_polygon_10k_vertices", |b| {
        b.iter(|| {
            let mut bounds = BoundingBox::new();
            bounds.extend(black_box(&polygon));
            black_box(bounds);
        })
    });
}

criterion_group!(benches, bench_normalize_polygon, bench_bounds_polygon);
criterion_main!(benches);
