use anyhow::{Context, Result};
use chainhull::source::{UniformParams, MAX_RANDOM_POINTS, MAX_RANGE};
use chainhull::{HullKind, HullReport};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod render;
mod sidecar;

use input::{collect_points, SourceArgs};
use sidecar::{ensure_parent, write_sidecar, RunRecord};

#[derive(Parser)]
#[command(name = "chainhull-cli")]
#[command(about = "Convex hull (monotone chain) of planar points, with shape label")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull and print its label and vertices
    Hull {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Also write the JSON report here (plus a `.run.json` record)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Render points, hull and axes to an SVG file
    Figure {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print version, random-source defaults and limits, and the label table
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            source,
            format,
            out,
        } => hull(&source, format, out.as_deref()),
        Action::Figure { source, out } => figure(&source, &out),
        Action::Report => report(),
    }
}

fn hull(source: &SourceArgs, format: Format, out: Option<&Path>) -> Result<()> {
    let drawn = collect_points(source)?;
    let report = HullReport::from_points(&drawn.points);
    tracing::info!(
        mode = source.mode(),
        points = report.input_points,
        hull = report.hull_points,
        label = %report.label,
        "hull"
    );
    match format {
        Format::Text => print!("{}", render::text_report(&report)?),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    if let Some(out) = out {
        ensure_parent(out)?;
        std::fs::write(out, serde_json::to_vec_pretty(&report)?)
            .with_context(|| format!("writing {}", out.display()))?;
        write_sidecar(&RunRecord::new(source, &drawn, &report, out))?;
    }
    Ok(())
}

fn figure(source: &SourceArgs, out: &Path) -> Result<()> {
    let drawn = collect_points(source)?;
    let points = &drawn.points;
    tracing::info!(mode = source.mode(), points = points.len(), out = %out.display(), "figure");
    if points.is_empty() {
        tracing::warn!("no points, figure skipped");
        return Ok(());
    }
    let report = HullReport::from_points(points);
    let svg = render::svg_figure(points, &report)
        .with_context(|| format!("rendering {}", out.display()))?;
    ensure_parent(out)?;
    std::fs::write(out, svg).with_context(|| format!("writing {}", out.display()))?;
    write_sidecar(&RunRecord::new(source, &drawn, &report, out))?;
    Ok(())
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&tool_info())?);
    Ok(())
}

fn tool_info() -> serde_json::Value {
    let labels: serde_json::Map<String, serde_json::Value> = (0..=5)
        .map(|n| (n.to_string(), HullKind::from_vertex_count(n).to_string().into()))
        .collect();
    serde_json::json!({
        "version": chainhull::VERSION,
        "random_defaults": UniformParams::default(),
        "limits": {
            "max_random_points": MAX_RANDOM_POINTS,
            "max_range": MAX_RANGE,
        },
        "labels_by_vertex_count": labels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainhull::Point;
    use clap::CommandFactory;
    use tempfile::tempdir;

    #[test]
    fn cli_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn parses_manual_points_with_negatives() {
        let cmd = Cmd::try_parse_from([
            "chainhull-cli",
            "hull",
            "--point",
            "-1,2",
            "--point",
            "3,-4",
            "--format",
            "json",
        ])
        .unwrap();
        match cmd.action {
            Action::Hull { source, format, .. } => {
                assert_eq!(source.points, vec![Point::new(-1.0, 2.0), Point::new(3.0, -4.0)]);
                assert!(matches!(format, Format::Json));
            }
            _ => panic!("expected hull"),
        }
    }

    #[test]
    fn manual_and_random_conflict() {
        let res = Cmd::try_parse_from(["chainhull-cli", "hull", "--point", "0,0", "--random", "3"]);
        assert!(res.is_err());
    }

    #[test]
    fn range_and_seed_need_random() {
        for args in [
            ["chainhull-cli", "hull", "--range", "3"],
            ["chainhull-cli", "hull", "--seed", "7"],
        ] {
            assert!(Cmd::try_parse_from(args).is_err(), "{args:?}");
        }
        assert!(Cmd::try_parse_from(["chainhull-cli", "hull", "--random", "3", "--range", "3"]).is_ok());
        assert!(Cmd::try_parse_from(["chainhull-cli", "hull", "--point", "1,1"]).is_ok());
    }

    #[test]
    fn tool_info_lists_defaults_and_labels() {
        let info = tool_info();
        assert_eq!(info["version"], chainhull::VERSION);
        assert_eq!(info["random_defaults"]["count"], 4);
        assert_eq!(info["random_defaults"]["range"], 10.0);
        assert_eq!(info["limits"]["max_random_points"], 100);
        assert_eq!(info["labels_by_vertex_count"]["4"], "quadrilateral");
        assert_eq!(info["labels_by_vertex_count"]["5"], "polygon (5 vertices)");
    }

    #[test]
    fn hull_writes_report_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out").join("hull.json");
        let cmd = Cmd::try_parse_from(["chainhull-cli", "hull", "--random", "20", "--seed", "3"])
            .unwrap();
        let Action::Hull { source, .. } = cmd.action else {
            panic!("expected hull");
        };
        hull(&source, Format::Json, Some(&out)).unwrap();
        let parsed: HullReport = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed.input_points, 20);
        assert_eq!(parsed.closed_loop.len(), parsed.hull_points + 1);
        let record: serde_json::Value = serde_json::from_slice(
            &std::fs::read(dir.path().join("out").join("hull.run.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(record["label"], parsed.label.as_str());
        assert_eq!(record["random"]["master_seed"], 3);
        assert!(record["random"]["replay"]["seed"].is_u64());
    }

    #[test]
    fn figure_skips_empty_input() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("empty.svg");
        let cmd = Cmd::try_parse_from(["chainhull-cli", "figure", "--out", "x.svg"]).unwrap();
        let Action::Figure { source, .. } = cmd.action else {
            panic!("expected figure");
        };
        figure(&source, &out).unwrap();
        assert!(!out.exists());

        let full = dir.path().join("square.svg");
        let mut source = source;
        source.points = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ];
        figure(&source, &full).unwrap();
        let svg = std::fs::read_to_string(&full).unwrap();
        assert!(svg.contains("quadrilateral"));
    }
}
