//! Print a few random hulls with their labels.
//!
//! Usage:
//!   cargo run -p chainhull --example random_hulls -- 12
//!
//! The optional argument is the point count per draw (default 4).

use chainhull::source::{PointSource, UniformParams, UniformSource};
use chainhull::HullReport;

fn main() {
    let count = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(4);
    let params = UniformParams {
        count,
        ..UniformParams::default()
    };
    let mut src = match UniformSource::new(params, 2025) {
        Ok(src) => src,
        Err(err) => {
            eprintln!("usage: random_hulls [count]: {err}");
            return;
        }
    };
    for i in 0..5 {
        let sample = src.generate_next();
        let report = HullReport::from_points(&sample.points);
        println!(
            "draw {i} (seed {}): {} of {} points on hull, {}",
            sample.replay.seed, report.hull_points, report.input_points, report.label
        );
    }
}
