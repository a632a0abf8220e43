use geo::{Coord, Rect};

use crate::geometry::normalize::NormalizedGeometry;

/// Running `(minLng, minLat, maxLng, maxLat)` extent over normalized geometries.
///
/// The box starts empty and only ever grows. An empty box means "leave the
/// viewport alone".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox(Option<Rect<f64>>);

impl BoundingBox {
    pub fn new() -> Self {
        Self(None)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Returns `[minLng, minLat, maxLng, maxLat]`, or `None` while empty.
    pub fn to_bbox(&self) -> Option<[f64; 4]> {
        self.0
            .map(|rect| [rect.min().x, rect.min().y, rect.max().x, rect.max().y])
    }

    /// Extends the box with a single position.
    ///
    /// Positions with fewer than two components, or a non-finite longitude or
    /// latitude, are skipped.
    pub fn extend_position(&mut self, position: &[f64]) {
        let &[x, y, ..] = position else {
            return;
        };
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        self.extend_coord(Coord { x, y });
    }

    fn extend_coord(&mut self, coord: Coord<f64>) {
        self.0 = Some(match self.0 {
            None => Rect::new(coord, coord),
            Some(rect) => Rect::new(
                Coord {
                    x: rect.min().x.min(coord.x),
                    y: rect.min().y.min(coord.y),
                },
                Coord {
                    x: rect.max().x.max(coord.x),
                    y: rect.max().y.max(coord.y),
                },
            ),
        });
    }

    /// Extends the box with every position of a geometry.
    pub fn extend(&mut self, geometry: &NormalizedGeometry) {
        match geometry {
            NormalizedGeometry::Point(position) => self.extend_position(position),
            NormalizedGeometry::MultiPoint(positions)
            | NormalizedGeometry::LineString(positions) => self.extend_positions(positions),
            NormalizedGeometry::MultiLineString(lines) | NormalizedGeometry::Polygon(lines) => {
                for line in lines {
                    self.extend_positions(line);
                }
            }
            NormalizedGeometry::MultiPolygon(polygons) => {
                for ring in polygons.iter().flatten() {
                    self.extend_positions(ring);
                }
            }
        }
    }

    fn extend_positions(&mut self, positions: &[Vec<f64>]) {
        for position in positions {
            self.extend_position(position);
        }
    }

    /// Extends the box to also cover another box.
    pub fn union(&mut self, other: &BoundingBox) {
        if let Some(rect) = other.0 {
            self.extend_coord(rect.min());
            self.extend_coord(rect.max());
        }
    }
}

impl<'a> FromIterator<&'a NormalizedGeometry> for BoundingBox {
    fn from_iter<I: IntoIterator<Item = &'a NormalizedGeometry>>(iter: I) -> Self {
        let mut bounds = BoundingBox::new();
        for geometry in iter {
            bounds.extend(geometry);
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polygon() -> NormalizedGeometry {
        NormalizedGeometry::Polygon(vec![vec![
            vec![-110.0, 45.0],
            vec![-110.0, 45.1],
            vec![-110.1, 45.1],
            vec![-110.0, 45.0],
        ]])
    }

    #[test]
    fn test_starts_empty() {
        let bounds = BoundingBox::new();
        assert!(bounds.is_empty());
        assert_eq!(bounds.to_bbox(), None);
    }

    #[test]
    fn test_single_point_gives_degenerate_box() {
        let mut bounds = BoundingBox::new();
        bounds.extend(&NormalizedGeometry::Point(vec![-110.0, 45.0, 900.0]));
        assert_eq!(bounds.to_bbox(), Some([-110.0, 45.0, -110.0, 45.0]));
    }

    #[test]
    fn test_polygon_extent() {
        let mut bounds = BoundingBox::new();
        bounds.extend(&polygon());
        assert_eq!(bounds.to_bbox(), Some([-110.1, 45.0, -110.0, 45.1]));
    }

    #[test]
    fn test_multi_polygon_extent() {
        let geometry = NormalizedGeometry::MultiPolygon(vec![
            vec![vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![1.0, 1.0], vec![0.0, 0.0]]],
            vec![vec![vec![5.0, -3.0], vec![6.0, -3.0], vec![6.0, -2.0], vec![5.0, -3.0]]],
        ]);
        let mut bounds = BoundingBox::new();
        bounds.extend(&geometry);
        assert_eq!(bounds.to_bbox(), Some([0.0, -3.0, 6.0, 1.0]));
    }

    #[test]
    fn test_accumulation_is_union_of_parts() {
        let first = polygon();
        let second = NormalizedGeometry::LineString(vec![vec![-100.0, 40.0], vec![-99.0, 41.0]]);

        let together: BoundingBox = [&first, &second].into_iter().collect();

        let mut union = BoundingBox::new();
        union.extend(&first);
        let mut other = BoundingBox::new();
        other.extend(&second);
        union.union(&other);

        assert_eq!(together, union);
        assert_eq!(together.to_bbox(), Some([-110.1, 40.0, -99.0, 45.1]));
    }

    #[test]
    fn test_never_shrinks() {
        let mut bounds = BoundingBox::new();
        bounds.extend(&polygon());
        let before = bounds.to_bbox().unwrap();
        bounds.extend(&NormalizedGeometry::Point(vec![-110.05, 45.05]));
        assert_eq!(bounds.to_bbox().unwrap(), before);
    }

    #[test]
    fn test_nothing_valid_leaves_box_empty() {
        let mut bounds = BoundingBox::new();
        bounds.extend(&NormalizedGeometry::Point(vec![]));
        bounds.extend(&NormalizedGeometry::Polygon(vec![]));
        bounds.extend(&NormalizedGeometry::MultiPoint(vec![vec![1.0], vec![f64::NAN, 2.0]]));
        assert!(bounds.is_empty());
        bounds.union(&BoundingBox::new());
        assert!(bounds.is_empty());
    }
}
