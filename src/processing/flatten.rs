use geojson::{Feature, Geometry};
use serde_json::{Map, Value as JsonValue};

use crate::geometry::normalize::{NormalizedGeometry, normalize_geometry};
use crate::utils::error::Error;

/// Struct to hold a normalized geometry with its merged display properties
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedFeature {
    pub geometry: NormalizedGeometry,
    pub properties: Map<String, JsonValue>,
}

/// Convert a NormalizedFeature to a geojson Feature
impl From<NormalizedFeature> for Feature {
    fn from(feature: NormalizedFeature) -> Feature {
        Feature {
            bbox: None,
            geometry: Some(Geometry::from(feature.geometry)),
            id: None,
            properties: Some(feature.properties),
            foreign_members: None,
        }
    }
}

/// Flattens a raw GeoJSON container into normalized features.
///
/// Accepts a bare geometry, a Feature, a FeatureCollection (possibly nested) or a
/// plain array of features / geometries. `attrs` is merged into the properties of
/// every produced feature and wins over properties already on an embedded Feature.
///
/// Entries that cannot be normalized are skipped; the rest keep their source
/// order.
///
/// # Returns
/// * The produced features and, for every skipped entry, the reason it was skipped
pub fn flatten(
    container: &JsonValue,
    attrs: &Map<String, JsonValue>,
) -> (Vec<NormalizedFeature>, Vec<Error>) {
    let mut features = Vec::new();
    let mut skipped = Vec::new();

    match container {
        JsonValue::Null => {}
        JsonValue::Array(entries) => {
            flatten_entries(entries, attrs, &mut features, &mut skipped);
        }
        JsonValue::Object(object) => match object.get("type").and_then(JsonValue::as_str) {
            Some("FeatureCollection") => {
                flatten_collection(object, attrs, &mut features, &mut skipped)
            }
            Some("Feature") => match flatten_feature(object, attrs) {
                Ok(feature) => features.push(feature),
                Err(err) => skipped.push(err),
            },
            Some(_) => match normalize_geometry(container) {
                Ok(geometry) => features.push(NormalizedFeature {
                    geometry,
                    properties: attrs.clone(),
                }),
                Err(err) => skipped.push(err),
            },
            None => skipped.push(Error::UnrecognizedContainer),
        },
        _ => skipped.push(Error::UnrecognizedContainer),
    }

    (features, skipped)
}

/// Parses raw GeoJSON text and flattens it.
///
/// Absent or blank text yields nothing. Text that is not valid JSON yields no
/// features and a single `MalformedJson` skip reason.
pub fn flatten_text(
    raw: Option<&str>,
    attrs: &Map<String, JsonValue>,
) -> (Vec<NormalizedFeature>, Vec<Error>) {
    let Some(raw) = raw.filter(|text| !text.trim().is_empty()) else {
        return (Vec::new(), Vec::new());
    };

    match serde_json::from_str::<JsonValue>(raw) {
        Ok(container) => flatten(&container, attrs),
        Err(err) => (Vec::new(), vec![Error::from(err)]),
    }
}

fn flatten_collection(
    collection: &Map<String, JsonValue>,
    attrs: &Map<String, JsonValue>,
    features: &mut Vec<NormalizedFeature>,
    skipped: &mut Vec<Error>,
) {
    match collection.get("features") {
        Some(JsonValue::Array(entries)) => flatten_entries(entries, attrs, features, skipped),
        None | Some(JsonValue::Null) => {}
        Some(_) => skipped.push(Error::UnrecognizedContainer),
    }
}

fn flatten_entries(
    entries: &[JsonValue],
    attrs: &Map<String, JsonValue>,
    features: &mut Vec<NormalizedFeature>,
    skipped: &mut Vec<Error>,
) {
    for entry in entries {
        let JsonValue::Object(object) = entry else {
            skipped.push(Error::InvalidFeature);
            continue;
        };

        match object.get("type").and_then(JsonValue::as_str) {
            Some("Feature") => match flatten_feature(object, attrs) {
                Ok(feature) => features.push(feature),
                Err(err) => skipped.push(err),
            },
            Some("FeatureCollection") => flatten_collection(object, attrs, features, skipped),
            Some(_) if object.contains_key("coordinates") => match normalize_geometry(entry) {
                Ok(geometry) => features.push(NormalizedFeature {
                    geometry,
                    properties: attrs.clone(),
                }),
                Err(err) => skipped.push(err),
            },
            Some(_) => skipped.push(Error::InvalidFeature),
            None => skipped.push(Error::MissingGeometryType),
        }
    }
}

fn flatten_feature(
    feature: &Map<String, JsonValue>,
    attrs: &Map<String, JsonValue>,
) -> Result<NormalizedFeature, Error> {
    let geometry = feature.get("geometry").unwrap_or(&JsonValue::Null);
    let geometry = normalize_geometry(geometry)?;

    let mut properties = match feature.get("properties") {
        Some(JsonValue::Object(own)) => own.clone(),
        _ => Map::with_capacity(attrs.len()),
    };
    for (key, value) in attrs {
        properties.insert(key.clone(), value.clone());
    }

    Ok(NormalizedFeature {
        geometry,
        properties,
    })
}
