use geojson::Position;

/// Closes a polygon ring.
///
/// Rings with fewer than three positions are returned as they are. Otherwise the
/// first and last positions are compared on their first two components and, when
/// they differ, a copy of the first position is appended.
pub fn close_ring(ring: &[Position]) -> Vec<Position> {
    let mut closed = ring.to_vec();
    if ring.len() < 3 || is_closed(ring) {
        return closed;
    }

    if let Some(first) = ring.first() {
        closed.push(first.clone());
    }
    closed
}

/// Returns `true` if the ring has at least three positions and ends where it starts.
pub fn is_closed(ring: &[Position]) -> bool {
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) if ring.len() >= 3 => same_xy(first, last),
        _ => false,
    }
}

fn same_xy(a: &[f64], b: &[f64]) -> bool {
    a.first() == b.first() && a.get(1) == b.get(1)
}
