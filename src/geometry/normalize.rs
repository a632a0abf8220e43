use geojson::{Position, Value};
use serde_json::Value as JsonValue;

use crate::geometry::coordinates::{correct_position, correct_positions};
use crate::geometry::rings::close_ring;
use crate::utils::error::Error;

/// The geometry types the pipeline knows how to normalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
}

impl TryFrom<&str> for GeometryKind {
    type Error = Error;

    fn try_from(tag: &str) -> Result<Self, Self::Error> {
        match tag {
            "Point" => Ok(GeometryKind::Point),
            "MultiPoint" => Ok(GeometryKind::MultiPoint),
            "LineString" => Ok(GeometryKind::LineString),
            "MultiLineString" => Ok(GeometryKind::MultiLineString),
            "Polygon" => Ok(GeometryKind::Polygon),
            "MultiPolygon" => Ok(GeometryKind::MultiPolygon),
            other => Err(Error::UnsupportedGeometryType(other.to_string())),
        }
    }
}

/// A geometry whose positions are longitude-first and whose polygon rings are closed.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedGeometry {
    Point(Position),
    MultiPoint(Vec<Position>),
    LineString(Vec<Position>),
    MultiLineString(Vec<Vec<Position>>),
    Polygon(Vec<Vec<Position>>),
    MultiPolygon(Vec<Vec<Vec<Position>>>),
}

#[cfg(test)]
impl NormalizedGeometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            NormalizedGeometry::Point(_) => GeometryKind::Point,
            NormalizedGeometry::MultiPoint(_) => GeometryKind::MultiPoint,
            NormalizedGeometry::LineString(_) => GeometryKind::LineString,
            NormalizedGeometry::MultiLineString(_) => GeometryKind::MultiLineString,
            NormalizedGeometry::Polygon(_) => GeometryKind::Polygon,
            NormalizedGeometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
        }
    }
}

/// Convert a NormalizedGeometry to a geojson Value
impl From<NormalizedGeometry> for Value {
    fn from(geometry: NormalizedGeometry) -> Self {
        match geometry {
            NormalizedGeometry::Point(position) => Value::Point(position),
            NormalizedGeometry::MultiPoint(positions) => Value::MultiPoint(positions),
            NormalizedGeometry::LineString(positions) => Value::LineString(positions),
            NormalizedGeometry::MultiLineString(lines) => Value::MultiLineString(lines),
            NormalizedGeometry::Polygon(rings) => Value::Polygon(rings),
            NormalizedGeometry::MultiPolygon(polygons) => Value::MultiPolygon(polygons),
        }
    }
}

/// Normalizes one raw geometry object.
///
/// Positions are put into longitude-first order and every polygon ring is closed.
/// A missing `coordinates` member is read as an empty sequence of the depth the
/// type implies.
///
/// # Arguments
/// * `geometry`: The untyped geometry object, e.g. `{"type": "Point", "coordinates": [..]}`
///
/// # Returns
/// * The normalized geometry, or the reason it has to be skipped
pub fn normalize_geometry(geometry: &JsonValue) -> Result<NormalizedGeometry, Error> {
    let object = match geometry {
        JsonValue::Null => return Err(Error::MissingGeometry),
        JsonValue::Object(object) => object,
        _ => return Err(Error::MissingGeometryType),
    };

    let tag = object
        .get("type")
        .and_then(JsonValue::as_str)
        .ok_or(Error::MissingGeometryType)?;
    let kind = GeometryKind::try_from(tag)?;

    let coordinates = match object.get("coordinates") {
        None | Some(JsonValue::Null) => None,
        Some(coordinates) => Some(coordinates),
    };

    let normalized = match kind {
        GeometryKind::Point => {
            let position = match coordinates {
                Some(c) => parse_position(c)?,
                None => Vec::new(),
            };
            NormalizedGeometry::Point(correct_position(&position))
        }
        GeometryKind::MultiPoint => {
            NormalizedGeometry::MultiPoint(correct_positions(&parse_depth_1(coordinates)?))
        }
        GeometryKind::LineString => {
            NormalizedGeometry::LineString(correct_positions(&parse_depth_1(coordinates)?))
        }
        GeometryKind::MultiLineString => NormalizedGeometry::MultiLineString(
            parse_depth_2(coordinates)?
                .iter()
                .map(|line| correct_positions(line))
                .collect(),
        ),
        GeometryKind::Polygon => {
            NormalizedGeometry::Polygon(normalize_rings(&parse_depth_2(coordinates)?))
        }
        GeometryKind::MultiPolygon => {
            let polygons = match coordinates {
                Some(c) => parse_array(c, parse_rings)?,
                None => Vec::new(),
            };
            NormalizedGeometry::MultiPolygon(
                polygons.iter().map(|rings| normalize_rings(rings)).collect(),
            )
        }
    };

    Ok(normalized)
}

fn normalize_rings(rings: &[Vec<Position>]) -> Vec<Vec<Position>> {
    rings
        .iter()
        .map(|ring| close_ring(&correct_positions(ring)))
        .collect()
}

fn parse_depth_1(coordinates: Option<&JsonValue>) -> Result<Vec<Position>, Error> {
    match coordinates {
        Some(c) => parse_array(c, parse_position),
        None => Ok(Vec::new()),
    }
}

fn parse_depth_2(coordinates: Option<&JsonValue>) -> Result<Vec<Vec<Position>>, Error> {
    match coordinates {
        Some(c) => parse_rings(c),
        None => Ok(Vec::new()),
    }
}

fn parse_rings(value: &JsonValue) -> Result<Vec<Vec<Position>>, Error> {
    parse_array(value, |ring| parse_array(ring, parse_position))
}

fn parse_array<T>(
    value: &JsonValue,
    parse_item: impl Fn(&JsonValue) -> Result<T, Error>,
) -> Result<Vec<T>, Error> {
    value
        .as_array()
        .ok_or(Error::InvalidCoordinates)?
        .iter()
        .map(parse_item)
        .collect()
}

fn parse_position(value: &JsonValue) -> Result<Position, Error> {
    let items = value.as_array().ok_or(Error::InvalidCoordinates)?;
    // (lng, lat) with an optional elevation
    if !(2..=3).contains(&items.len()) {
        return Err(Error::InvalidCoordinates);
    }
    items
        .iter()
        .map(|v| v.as_f64().ok_or(Error::InvalidCoordinates))
        .collect()
}
