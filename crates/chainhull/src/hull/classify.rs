//! Shape labels derived from the hull vertex count.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::Point;

/// Shape of a hull, keyed only by its vertex count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HullKind {
    Undetermined,
    Point,
    Segment,
    Triangle,
    Quadrilateral,
    /// Five or more vertices.
    Polygon(usize),
}

impl HullKind {
    /// Exactly 4 maps to `Quadrilateral`; only 5 and up become `Polygon`.
    pub fn from_vertex_count(n: usize) -> Self {
        match n {
            0 => Self::Undetermined,
            1 => Self::Point,
            2 => Self::Segment,
            3 => Self::Triangle,
            4 => Self::Quadrilateral,
            n => Self::Polygon(n),
        }
    }
}

impl fmt::Display for HullKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undetermined => f.write_str("undetermined"),
            Self::Point => f.write_str("point"),
            Self::Segment => f.write_str("segment"),
            Self::Triangle => f.write_str("triangle"),
            Self::Quadrilateral => f.write_str("quadrilateral"),
            Self::Polygon(n) => write!(f, "polygon ({n} vertices)"),
        }
    }
}

/// Label for a hull boundary as returned by `compute_hull`.
pub fn classify(hull: &[Point]) -> String {
    HullKind::from_vertex_count(hull.len()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_by_count() {
        let labels: Vec<String> = (0..7)
            .map(|n| HullKind::from_vertex_count(n).to_string())
            .collect();
        assert_eq!(
            labels,
            vec![
                "undetermined",
                "point",
                "segment",
                "triangle",
                "quadrilateral",
                "polygon (5 vertices)",
                "polygon (6 vertices)",
            ]
        );
    }

    #[test]
    fn four_is_never_a_polygon() {
        assert_eq!(HullKind::from_vertex_count(4), HullKind::Quadrilateral);
        let square = [Point::new(0.0, 0.0); 4];
        assert_eq!(classify(&square), "quadrilateral");
    }

    #[test]
    fn serde_tags() {
        let s = serde_json::to_string(&HullKind::Polygon(7)).unwrap();
        assert_eq!(s, r#"{"polygon":7}"#);
        let k: HullKind = serde_json::from_str(r#""segment""#).unwrap();
        assert_eq!(k, HullKind::Segment);
    }
}
