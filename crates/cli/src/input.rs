use anyhow::{bail, Context, Result};
use chainhull::source::{ManualPoints, PointSource, SeedReplay, UniformParams, UniformSource};
use chainhull::Point;
use clap::Args;
use polars::prelude::*;
use std::path::{Path, PathBuf};

/// Where the points come from. Without any option the point list is empty.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Manual point as `x,y`; repeat for more points
    #[arg(
        long = "point",
        value_name = "X,Y",
        value_parser = point_arg,
        allow_hyphen_values = true,
        conflicts_with_all = ["input", "random"]
    )]
    pub points: Vec<Point>,
    /// CSV file with numeric columns `x` and `y`
    #[arg(long, conflicts_with = "random")]
    pub input: Option<PathBuf>,
    /// Draw this many uniform random points in [-range, range]²
    #[arg(long)]
    pub random: Option<usize>,
    /// Half-width of the random sampling square
    #[arg(long, default_value_t = UniformParams::default().range, requires = "random")]
    pub range: f64,
    /// Seed for the random source
    #[arg(long, default_value_t = 0, requires = "random")]
    pub seed: u64,
}

impl SourceArgs {
    pub fn mode(&self) -> &'static str {
        if self.random.is_some() {
            "random"
        } else if self.input.is_some() {
            "csv"
        } else {
            "manual"
        }
    }
}

/// Points of one run; `replay` is set for random draws.
#[derive(Debug, Clone)]
pub struct Drawn {
    pub points: Vec<Point>,
    pub replay: Option<SeedReplay>,
}

/// Assemble the point list for one run.
pub fn collect_points(args: &SourceArgs) -> Result<Drawn> {
    if let Some(count) = args.random {
        let params = UniformParams {
            count,
            range: args.range,
        };
        let mut src = UniformSource::new(params, args.seed).context("random point source")?;
        let (points, replay) = draw(&mut src);
        return Ok(Drawn {
            points,
            replay: Some(replay),
        });
    }
    let raw = match &args.input {
        Some(path) => read_csv_points(path)?,
        None => args.points.clone(),
    };
    let mut src = ManualPoints::new(raw).context("manual point source")?;
    let (points, ()) = draw(&mut src);
    Ok(Drawn {
        points,
        replay: None,
    })
}

fn draw<S: PointSource>(src: &mut S) -> (Vec<Point>, S::Replay) {
    let sample = src.generate_next();
    tracing::debug!(points = sample.points.len(), replay = ?sample.replay, "draw");
    (sample.points, sample.replay)
}

/// Read `x`,`y` columns (any numeric type) from a headed CSV file.
pub fn read_csv_points(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => out.push(Point::new(x, y)),
            _ => bail!("{}: row {} has a missing coordinate", path.display(), row + 1),
        }
    }
    tracing::info!(rows = out.len(), path = %path.display(), "input_csv");
    Ok(out)
}

fn point_arg(s: &str) -> Result<Point, String> {
    parse_point(s).map_err(|e| format!("{e:#}"))
}

/// Parse `x,y` (surrounding whitespace allowed).
pub fn parse_point(s: &str) -> Result<Point> {
    let Some((x, y)) = s.split_once(',') else {
        bail!("expected `x,y`, got {s:?}");
    };
    let x: f64 = x.trim().parse().with_context(|| format!("bad x in {s:?}"))?;
    let y: f64 = y.trim().parse().with_context(|| format!("bad y in {s:?}"))?;
    Ok(Point::new(x, y))
}
