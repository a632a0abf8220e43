use geojson::Position;

/// Largest magnitude a latitude may take.
pub const MAX_LATITUDE: f64 = 90.0;
/// Largest magnitude a longitude may take.
pub const MAX_LONGITUDE: f64 = 180.0;

/// Puts a position into longitude-first order.
///
/// Authored positions may arrive as `(lat, lng)` or `(lng, lat)`. A pair `(a, b)`
/// with `|a| <= 90` and `|b| <= 180` is read as `(lat, lng)` and swapped; anything
/// else is returned unchanged. Elements after the first two (elevation) keep their
/// place.
///
/// Pairs where both orders are valid, e.g. `(10, 20)`, are always swapped. That is
/// a heuristic and can be wrong for data that was already longitude-first.
///
/// # Arguments
/// * `position`: The position to correct, expected to hold at least two values
///
/// # Returns
/// * A new, corrected position
pub fn correct_position(position: &[f64]) -> Position {
    let mut corrected = position.to_vec();
    if let [a, b, ..] = position {
        if a.abs() <= MAX_LATITUDE && b.abs() <= MAX_LONGITUDE {
            corrected.swap(0, 1);
        }
    }
    corrected
}

/// Corrects every position of a flat sequence.
pub fn correct_positions(positions: &[Position]) -> Vec<Position> {
    positions.iter().map(|p| correct_position(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_first_is_swapped() {
        assert_eq!(correct_position(&[45.0, -110.0]), vec![-110.0, 45.0]);
        assert_eq!(correct_position(&[-33.9, 151.2]), vec![151.2, -33.9]);
    }

    #[test]
    fn test_lng_first_out_of_lat_range_is_kept() {
        assert_eq!(correct_position(&[-110.0, 45.0]), vec![-110.0, 45.0]);
        assert_eq!(correct_position(&[151.2, -33.9]), vec![151.2, -33.9]);
    }

    #[test]
    fn test_out_of_range_is_passed_through() {
        assert_eq!(correct_position(&[45.0, 200.0]), vec![45.0, 200.0]);
        assert_eq!(correct_position(&[500.0, 500.0]), vec![500.0, 500.0]);
    }

    #[test]
    fn test_elevation_is_preserved() {
        assert_eq!(
            correct_position(&[45.0, -110.0, 1200.0]),
            vec![-110.0, 45.0, 1200.0]
        );
        assert_eq!(
            correct_position(&[-110.0, 45.0, 1200.0]),
            vec![-110.0, 45.0, 1200.0]
        );
    }

    #[test]
    fn test_boundary_values_swap() {
        assert_eq!(correct_position(&[90.0, 180.0]), vec![180.0, 90.0]);
        assert_eq!(correct_position(&[-90.0, -180.0]), vec![-180.0, -90.0]);
    }

    #[test]
    fn test_corrected_out_of_lat_range_is_stable() {
        let once = correct_position(&[45.0, -110.0]);
        assert_eq!(correct_position(&once), once);
    }

    // Both orders are valid here; the rule always reads (lat, lng).
    #[test]
    fn test_ambiguous_zone_follows_swap_rule() {
        assert_eq!(correct_position(&[10.0, 20.0]), vec![20.0, 10.0]);
        assert_eq!(correct_position(&[20.0, 10.0]), vec![10.0, 20.0]);
    }

    #[test]
    fn test_short_position_is_untouched() {
        assert_eq!(correct_position(&[12.0]), vec![12.0]);
        assert_eq!(correct_position(&[]), Vec::<f64>::new());
    }

    #[test]
    fn test_correct_positions() {
        let corrected = correct_positions(&[vec![45.0, -110.0], vec![-110.1, 45.1]]);
        assert_eq!(corrected, vec![vec![-110.0, 45.0], vec![-110.1, 45.1]]);
    }
}
