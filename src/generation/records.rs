use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

use crate::processing::attributes::Record;

const COLORS: [&str; 4] = ["#228b22", "#8fbc8f", "#daa520", "#cd853f"];

// Axis-aligned square around a center, (lat, lng) ordered and left open
fn open_square_lat_first(lat: f64, lng: f64, half: f64) -> Vec<[f64; 2]> {
    vec![
        [lat - half, lng - half],
        [lat - half, lng + half],
        [lat + half, lng + half],
        [lat + half, lng - half],
    ]
}

fn closed_square_lng_first(lat: f64, lng: f64, half: f64) -> Vec<[f64; 2]> {
    let mut ring: Vec<[f64; 2]> = open_square_lat_first(lat, lng, half)
        .into_iter()
        .map(|[a, b]| [b, a])
        .collect();
    ring.push(ring[0]);
    ring
}

// Generates one GeoJSON blob; the shape cycles so every batch exercises each path
fn synthetic_geojson(index: usize, rng: &mut StdRng) -> Option<String> {
    let lat = rng.gen_range(35.0..48.0);
    let lng = rng.gen_range(-120.0..-95.0);
    let half = rng.gen_range(0.01..0.2);

    let value = match index % 6 {
        0 => json!({
            "type": "Polygon",
            "coordinates": [open_square_lat_first(lat, lng, half)]
        }),
        1 => json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {"paddock": format!("P-{}", index)},
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [open_square_lat_first(lat, lng, half)]
                    }
                },
                {"type": "Circle", "coordinates": [lat, lng], "radius": 250},
                {
                    "type": "LineString",
                    "coordinates": [[lat, lng], [lat + half, lng + half]]
                }
            ]
        }),
        2 => json!({
            "type": "MultiPolygon",
            "coordinates": [
                [closed_square_lng_first(lat, lng, half)],
                [closed_square_lng_first(lat + 1.0, lng + 1.0, half)]
            ]
        }),
        3 => json!({
            "type": "Feature",
            "properties": null,
            "geometry": {"type": "Point", "coordinates": [lat, lng]}
        }),
        4 => return None,
        _ => return Some(format!("{{\"type\": \"Polygon\", \"coordinates\": [[[{}, {}]", lat, lng)),
    };

    Some(value.to_string())
}

/// Generates a deterministic batch of records for benchmarking and demos.
///
/// # Arguments
/// * `count`: Number of records to generate
/// * `seed`: Seed for the random number generator
///
/// # Returns
/// * A vector of records with a mix of geometry shapes, missing attributes, absent
///   and malformed GeoJSON
pub fn generate_records(count: usize, seed: u64) -> Vec<Record> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut records = Vec::with_capacity(count);

    for i in 0..count {
        let geojson = synthetic_geojson(i, &mut rng);
        let total_acres = rng.gen_bool(0.9).then(|| rng.gen_range(10.0..5_000.0));
        let forage_per_acre = rng.gen_bool(0.8).then(|| rng.gen_range(200.0..3_000.0));
        let utilization = rng.gen_bool(0.7).then(|| rng.gen_range(0.0..1.0));

        records.push(Record {
            id: format!("record-{}", i),
            active: Some(rng.gen_bool(0.9)),
            geojson,
            name: Some(format!("Pasture {}", i)),
            total_acres,
            forage_per_acre,
            utilization,
            color: rng
                .gen_bool(0.5)
                .then(|| COLORS[rng.gen_range(0..COLORS.len())].to_string()),
            opacity: None,
            stroke_width: None,
        });
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(generate_records(12, 7), generate_records(12, 7));
        assert_ne!(generate_records(12, 7), generate_records(12, 8));
    }

    #[test]
    fn test_generated_shapes_cycle() {
        let records = generate_records(6, 42);
        assert_eq!(records.len(), 6);
        assert!(records[4].geojson.is_none());
        let malformed = records[5].geojson.as_deref().unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(malformed).is_err());
        for record in &records[..4] {
            let text = record.geojson.as_deref().unwrap();
            assert!(serde_json::from_str::<serde_json::Value>(text).is_ok());
        }
    }
}
