//! Curated surface for renderers and front-ends.
//!
//! A front-end needs exactly two calls per interaction: `compute_hull_points`
//! and `classify_hull`. Everything else here is convenience on top.

pub use crate::hull::{classify, compute_hull, Hull, HullKind, HullReport, Point};
pub use crate::source::{ManualPoints, PointSource, UniformParams, UniformSource};

/// Hull of raw `(x, y)` pairs, returned as pairs.
///
/// Pre: coordinates are finite.
/// Post: CCW, duplicate-free, first vertex is the lexicographic minimum.
pub fn compute_hull_points(coords: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let points: Vec<Point> = coords.iter().map(|&c| Point::from(c)).collect();
    compute_hull(&points).into_iter().map(|p| (p.x, p.y)).collect()
}

/// Label for a hull given as raw pairs.
pub fn classify_hull(hull: &[(f64, f64)]) -> String {
    HullKind::from_vertex_count(hull.len()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_round_trip_through_core() {
        let hull = compute_hull_points(&[(0.0, 0.0), (0.0, 0.0), (0.0, 0.0)]);
        assert_eq!(hull, vec![(0.0, 0.0)]);
        assert_eq!(classify_hull(&hull), "point");

        let hull = compute_hull_points(&[(0.0, 0.0), (2.0, 0.0), (1.0, 1.0), (1.0, 0.5)]);
        assert_eq!(hull, vec![(0.0, 0.0), (2.0, 0.0), (1.0, 1.0)]);
        assert_eq!(classify_hull(&hull), "triangle");
        assert_eq!(classify_hull(&[]), "undetermined");
    }
}
