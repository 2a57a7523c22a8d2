//! Point sources feeding the hull builder.
//!
//! Purpose
//! - Keep point generation outside the hull core: callers pick a source
//!   (explicit list or uniform random in a symmetric square) and hand the
//!   resulting `Vec<Point>` to `compute_hull`.
//!
//! Why this design
//! - Every sample carries a replay token so a random draw can be reproduced
//!   exactly (`regenerate`) without keeping the points around.
//! - Parameters are validated once at construction; generation is infallible.
//!
//! Code cross-refs: `hull::compute_hull`, `hull::HullReport`

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::hull::Point;

/// Upper bound on the number of random points per draw.
pub const MAX_RANDOM_POINTS: usize = 100;

/// Largest accepted half-width: the sampler divides the width `2 * range`
/// by a factor just below 1, which must stay finite.
pub const MAX_RANGE: f64 = f64::MAX / 4.0;

/// Error type shared by all point sources.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceError {
    InvalidParams { reason: String },
    NonFinite { index: usize },
}

impl SourceError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid source params: {reason}"),
            Self::NonFinite { index } => write!(f, "point #{} has a non-finite coordinate", index + 1),
        }
    }
}

impl std::error::Error for SourceError {}

/// One batch of points plus what is needed to reproduce it.
#[derive(Clone, Debug)]
pub struct PointSample<R> {
    pub points: Vec<Point>,
    pub replay: R,
}

/// Common trait for point sources.
pub trait PointSource {
    type Replay: Clone + fmt::Debug;

    fn generate_next(&mut self) -> PointSample<Self::Replay>;

    fn regenerate(&self, replay: &Self::Replay) -> Vec<Point>;
}

/// Explicit, caller-supplied coordinates. Every draw returns the same list.
#[derive(Clone, Debug, Default)]
pub struct ManualPoints {
    points: Vec<Point>,
}

impl ManualPoints {
    /// Rejects NaN and infinite coordinates; an empty list is allowed.
    pub fn new(points: Vec<Point>) -> Result<Self, SourceError> {
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(SourceError::NonFinite { index });
        }
        Ok(Self { points })
    }
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl PointSource for ManualPoints {
    type Replay = ();

    fn generate_next(&mut self) -> PointSample<()> {
        PointSample {
            points: self.points.clone(),
            replay: (),
        }
    }

    fn regenerate(&self, _replay: &()) -> Vec<Point> {
        self.points.clone()
    }
}

/// Parameters for uniform points in `[-range, range]²`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UniformParams {
    pub count: usize,
    pub range: f64,
}

impl Default for UniformParams {
    fn default() -> Self {
        Self {
            count: 4,
            range: 10.0,
        }
    }
}

impl UniformParams {
    fn validate(&self) -> Result<(), SourceError> {
        if self.count == 0 {
            return Err(SourceError::invalid("need at least one point"));
        }
        if self.count > MAX_RANDOM_POINTS {
            return Err(SourceError::invalid(format!(
                "count must be <= {MAX_RANDOM_POINTS}, got {}",
                self.count
            )));
        }
        if !self.range.is_finite() || self.range <= 0.0 {
            return Err(SourceError::invalid("range must be finite and > 0"));
        }
        if self.range > MAX_RANGE {
            return Err(SourceError::invalid(format!(
                "range must be <= {MAX_RANGE:e}, got {:e}",
                self.range
            )));
        }
        Ok(())
    }
}

/// Replay token storing the seed that regenerates the same draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedReplay {
    pub seed: u64,
}

/// Uniform random points; each draw gets its own seed from a master RNG.
pub struct UniformSource {
    params: UniformParams,
    master_rng: StdRng,
}

impl UniformSource {
    pub fn new(params: UniformParams, seed: u64) -> Result<Self, SourceError> {
        params.validate()?;
        Ok(Self {
            params,
            master_rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn params(&self) -> &UniformParams {
        &self.params
    }

    /// One draw from an explicit seed, without a generator.
    pub fn generate_single(params: &UniformParams, seed: u64) -> Result<Vec<Point>, SourceError> {
        params.validate()?;
        Ok(draw_uniform(params, seed))
    }
}

impl PointSource for UniformSource {
    type Replay = SeedReplay;

    fn generate_next(&mut self) -> PointSample<SeedReplay> {
        let seed = self.master_rng.next_u64();
        PointSample {
            points: draw_uniform(&self.params, seed),
            replay: SeedReplay { seed },
        }
    }

    fn regenerate(&self, replay: &SeedReplay) -> Vec<Point> {
        draw_uniform(&self.params, replay.seed)
    }
}

fn draw_uniform(params: &UniformParams, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let r = params.range;
    (0..params.count)
        .map(|_| Point::new(rng.gen_range(-r..=r), rng.gen_range(-r..=r)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::{compute_hull, Hull};

    #[test]
    fn manual_rejects_non_finite() {
        let err = ManualPoints::new(vec![Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0)])
            .unwrap_err();
        assert_eq!(err, SourceError::NonFinite { index: 1 });
        assert_eq!(err.to_string(), "point #2 has a non-finite coordinate");
        assert!(ManualPoints::new(Vec::new()).is_ok());
    }

    #[test]
    fn manual_repeats_its_list() {
        let pts = vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)];
        let mut src = ManualPoints::new(pts.clone()).unwrap();
        assert_eq!(src.generate_next().points, pts);
        assert_eq!(src.generate_next().points, pts);
        assert_eq!(src.regenerate(&()), pts);
    }

    #[test]
    fn uniform_validation() {
        let bad = [
            UniformParams { count: 0, range: 1.0 },
            UniformParams { count: MAX_RANDOM_POINTS + 1, range: 1.0 },
            UniformParams { count: 3, range: 0.0 },
            UniformParams { count: 3, range: -2.0 },
            UniformParams { count: 3, range: f64::INFINITY },
            UniformParams { count: 4, range: 1e308 },
            UniformParams { count: 4, range: f64::MAX / 2.0 },
            UniformParams { count: 4, range: f64::MAX },
        ];
        for p in bad {
            assert!(matches!(
                UniformSource::new(p, 0),
                Err(SourceError::InvalidParams { .. })
            ));
        }
        assert!(UniformSource::new(UniformParams::default(), 0).is_ok());
    }

    #[test]
    fn widest_accepted_range_draws() {
        let params = UniformParams { count: 4, range: MAX_RANGE };
        let mut src = UniformSource::new(params, 1).unwrap();
        let sample = src.generate_next();
        assert_eq!(sample.points.len(), 4);
        assert!(sample.points.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn uniform_stays_in_range_and_replays() {
        let params = UniformParams { count: 50, range: 3.0 };
        let mut src = UniformSource::new(params, 2025).unwrap();
        let a = src.generate_next();
        let b = src.generate_next();
        assert_eq!(a.points.len(), 50);
        assert_ne!(a.replay, b.replay);
        assert!(a
            .points
            .iter()
            .all(|p| p.x.abs() <= 3.0 && p.y.abs() <= 3.0));
        assert_eq!(src.regenerate(&a.replay), a.points);
        assert_eq!(
            UniformSource::generate_single(&params, b.replay.seed).unwrap(),
            b.points
        );
    }

    #[test]
    fn random_hull_covers_draw() {
        let mut src = UniformSource::new(UniformParams { count: 100, range: 10.0 }, 7).unwrap();
        for _ in 0..20 {
            let sample = src.generate_next();
            let hull = Hull::from_points(&sample.points);
            assert_eq!(hull.vertices(), compute_hull(&sample.points).as_slice());
            assert!(hull.len() >= 3);
            assert!(sample.points.iter().all(|p| hull.contains_eps(*p, 1e-9)));
        }
    }
}
