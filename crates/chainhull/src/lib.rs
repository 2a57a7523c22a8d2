//! Planar convex hulls via the monotone chain sweep, with shape labels.
//!
//! Control flow: points → `compute_hull` → CCW vertices → `classify` → label.
//!
//! API Policy
//! - The core is pure and total: no I/O, no logging, no shared state.
//! - Point generation (manual list, uniform random) lives in `source` and is
//!   a caller concern; the hull builder only ever sees a `&[Point]`.

pub mod api;
pub mod hull;
pub mod source;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull::{classify, compute_hull, Hull, HullKind, HullReport, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{classify, compute_hull, cross, Hull, HullKind, HullReport, Point};
    pub use crate::source::{
        ManualPoints, PointSample, PointSource, SeedReplay, SourceError, UniformParams,
        UniformSource,
    };
}
