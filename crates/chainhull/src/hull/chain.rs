use super::types::{cross, Point};

/// Andrew’s monotone chain convex hull (returns hull in CCW order).
///
/// - Starts at the lexicographically smallest point; no closing repeat.
/// - Collinear points on an edge are dropped (strict turn test).
/// - Total: empty → empty, one point → that point, all-equal input → one point,
///   collinear input → its two extremes.
pub fn compute_hull(points: &[Point]) -> Vec<Point> {
    if points.len() <= 1 {
        return points.to_vec();
    }
    let first = points[0];
    if points.iter().all(|p| *p == first) {
        return vec![first];
    }
    let pts = canonical_order(points);
    let mut lower = half_chain(pts.iter());
    let mut upper = half_chain(pts.iter().rev());
    // Each chain ends where the other starts.
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

/// Dedup by value, then sort ascending by `(x, y)`.
pub fn canonical_order(points: &[Point]) -> Vec<Point> {
    let mut pts = points.to_vec();
    pts.sort_unstable();
    pts.dedup();
    pts
}

fn half_chain<'a>(sweep: impl Iterator<Item = &'a Point>) -> Vec<Point> {
    let (lo, _) = sweep.size_hint();
    let mut chain: Vec<Point> = Vec::with_capacity(lo);
    for &p in sweep {
        while chain.len() >= 2 && cross(chain[chain.len() - 2], chain[chain.len() - 1], p) <= 0.0 {
            chain.pop();
        }
        chain.push(p);
    }
    chain
}
