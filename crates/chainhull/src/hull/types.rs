//! Planar point type and the orientation predicate used by the sweep.
//!
//! - `Point`: value type with an explicit lexicographic total order (x, then y).
//! - `cross`: signed turn of an ordered triple; `> 0` is counter-clockwise.
//!
//! Code cross-refs: `chain::compute_hull`, `polygon::Hull`

use std::cmp::Ordering;
use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A point in the plane.
///
/// Invariants:
/// - Equality and ordering are lexicographic on `(x, y)`.
/// - `-0.0` and `0.0` are the same coordinate.
/// - Coordinates are expected to be finite; NaN has no meaningful place in the order.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.to_vec2() - self.to_vec2()).norm()
    }
}

// Adding +0.0 folds -0.0 into +0.0 and leaves every other value alone.
#[inline]
fn canon(v: f64) -> f64 {
    v + 0.0
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        canon(self.x)
            .total_cmp(&canon(other.x))
            .then_with(|| canon(self.y).total_cmp(&canon(other.y)))
    }
}

impl PartialOrd for Point {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Point {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Point {}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    /// Honors a precision flag, so `{:.2}` prints `(1.00, 2.50)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.*}, {:.*})", p, self.x, p, self.y),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

/// Z-component of `(a - o) × (b - o)`.
///
/// Positive for a counter-clockwise turn o→a→b, negative for clockwise,
/// zero when the three points are collinear.
#[inline]
pub fn cross(o: Point, a: Point, b: Point) -> f64 {
    let oa = a.to_vec2() - o.to_vec2();
    let ob = b.to_vec2() - o.to_vec2();
    oa.x * ob.y - oa.y * ob.x
}
