//! Helpers on top of [grid_util]'s [Point] that the searches depend on.
pub use grid_util::point::Point;
use smallvec::SmallVec;

/// The four axis-aligned neighbours in the fixed exploration order west, north, east, south.
/// Every search relies on this order for its tie-breaking, so it must not change. Neighbours that
/// would overflow the coordinate range are left out.
pub fn wnes_neighborhood(p: &Point) -> SmallVec<[Point; 4]> {
    [
        p.x.checked_sub(1).map(|x| Point::new(x, p.y)),
        p.y.checked_sub(1).map(|y| Point::new(p.x, y)),
        p.x.checked_add(1).map(|x| Point::new(x, p.y)),
        p.y.checked_add(1).map(|y| Point::new(p.x, y)),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Straight-line distance in double precision, used as the search heuristic.
pub fn euclidean_distance(a: &Point, b: &Point) -> f64 {
    let dx = b.x as f64 - a.x as f64;
    let dy = b.y as f64 - a.y as f64;
    (dx * dx + dy * dy).sqrt()
}
