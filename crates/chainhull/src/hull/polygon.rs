//! `Hull`: the CCW boundary produced by `compute_hull`, plus derived queries.

use serde::{Deserialize, Serialize};

use super::chain::compute_hull;
use super::classify::HullKind;
use super::types::{cross, Point};

/// Convex hull boundary in counter-clockwise order.
///
/// Invariants:
/// - No duplicate vertices, no repeated closing vertex.
/// - Starts at the lexicographically smallest input point.
/// - With 3+ vertices every consecutive triple (wrapping) turns strictly left.
///
/// Serializes as its vertex array. Deserializing takes any point array and
/// rebuilds the hull from it, so the invariants hold for decoded values too.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Point>", from = "Vec<Point>")]
pub struct Hull {
    vertices: Vec<Point>,
}

impl Hull {
    pub fn from_points(points: &[Point]) -> Self {
        Self {
            vertices: compute_hull(points),
        }
    }
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
    #[inline]
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    #[inline]
    pub fn kind(&self) -> HullKind {
        HullKind::from_vertex_count(self.len())
    }
    /// Recomputed on each call.
    pub fn label(&self) -> String {
        self.kind().to_string()
    }

    /// Vertices with the first one repeated at the end, ready for a polyline.
    /// Empty when there is nothing to draw (fewer than 2 vertices).
    pub fn closed_loop(&self) -> Vec<Point> {
        if self.len() < 2 {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(self.len() + 1);
        out.extend_from_slice(&self.vertices);
        out.push(self.vertices[0]);
        out
    }

    /// Enclosed area (shoelace); zero for fewer than 3 vertices.
    pub fn area(&self) -> f64 {
        if self.len() < 3 {
            return 0.0;
        }
        let n = self.len();
        let twice: f64 = (0..n)
            .map(|i| {
                let p = self.vertices[i];
                let q = self.vertices[(i + 1) % n];
                p.x * q.y - q.x * p.y
            })
            .sum();
        0.5 * twice
    }

    /// Length of the closed boundary. A segment hull counts its edge twice.
    pub fn perimeter(&self) -> f64 {
        self.closed_loop()
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .sum()
    }

    /// Whether `p` lies inside or on the boundary, allowing distance `eps` outside.
    pub fn contains_eps(&self, p: Point, eps: f64) -> bool {
        match self.vertices.as_slice() {
            [] => false,
            [v] => v.distance(p) <= eps,
            [a, b] => distance_to_segment(*a, *b, p) <= eps,
            vs => {
                let n = vs.len();
                (0..n).all(|i| {
                    let a = vs[i];
                    let b = vs[(i + 1) % n];
                    // signed distance to the edge line, positive on the inner side
                    cross(a, b, p) >= -eps * a.distance(b)
                })
            }
        }
    }
}

impl From<Vec<Point>> for Hull {
    fn from(points: Vec<Point>) -> Self {
        Self::from_points(&points)
    }
}

impl From<Hull> for Vec<Point> {
    fn from(hull: Hull) -> Self {
        hull.vertices
    }
}

impl AsRef<[Point]> for Hull {
    fn as_ref(&self) -> &[Point] {
        &self.vertices
    }
}

fn distance_to_segment(a: Point, b: Point, p: Point) -> f64 {
    let d = b.to_vec2() - a.to_vec2();
    let len2 = d.norm_squared();
    if len2 == 0.0 {
        return a.distance(p);
    }
    let t = ((p.to_vec2() - a.to_vec2()).dot(&d) / len2).clamp(0.0, 1.0);
    let closest = a.to_vec2() + d * t;
    (p.to_vec2() - closest).norm()
}

/// Everything a renderer needs for one computation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HullReport {
    pub kind: HullKind,
    pub label: String,
    pub input_points: usize,
    pub hull_points: usize,
    pub vertices: Vec<Point>,
    pub closed_loop: Vec<Point>,
    pub area: f64,
    pub perimeter: f64,
}

impl HullReport {
    pub fn from_points(points: &[Point]) -> Self {
        let hull = Hull::from_points(points);
        Self {
            kind: hull.kind(),
            label: hull.label(),
            input_points: points.len(),
            hull_points: hull.len(),
            closed_loop: hull.closed_loop(),
            area: hull.area(),
            perimeter: hull.perimeter(),
            vertices: hull.into_vertices(),
        }
    }
}
