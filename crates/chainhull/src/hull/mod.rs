//! Planar convex hulls (monotone chain) and shape classification.
//!
//! Purpose
//! - Turn a finite multiset of points into its CCW hull boundary and a
//!   vertex-count label ("point", "segment", …, "polygon (N vertices)").
//! - Stay total and pure: every finite input has a result, nothing is cached.
//!
//! Ordering
//! - `Point` carries an explicit lexicographic order (x, then y). The sweep
//!   depends on deduplicating by value and sorting by that order first.
//!
//! Code cross-refs: `compute_hull`, `classify`, `Hull`, `HullKind`

mod chain;
mod classify;
mod polygon;
mod types;

pub use chain::{canonical_order, compute_hull};
pub use classify::{classify, HullKind};
pub use polygon::{Hull, HullReport};
pub use types::{cross, Point};
