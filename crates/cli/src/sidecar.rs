//! Run records written next to every artifact (`<stem>.run.json`).
//!
//! A record is enough to redo the run: source mode, CSV path or random
//! parameters with the replay seed, plus the resulting label and counts.

use anyhow::{Context, Result};
use chainhull::source::{SeedReplay, UniformParams};
use chainhull::{HullKind, HullReport};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::input::{Drawn, SourceArgs};

/// Random-source settings of a run.
#[derive(Debug, Serialize)]
pub struct RandomRun {
    pub params: UniformParams,
    pub master_seed: u64,
    pub replay: Option<SeedReplay>,
}

#[derive(Debug, Serialize)]
pub struct RunRecord {
    pub version: &'static str,
    pub mode: &'static str,
    pub input: Option<PathBuf>,
    pub random: Option<RandomRun>,
    pub input_points: usize,
    pub hull_points: usize,
    pub kind: HullKind,
    pub label: String,
    pub artifact: PathBuf,
}

impl RunRecord {
    pub fn new(source: &SourceArgs, drawn: &Drawn, report: &HullReport, artifact: &Path) -> Self {
        let random = source.random.map(|count| RandomRun {
            params: UniformParams {
                count,
                range: source.range,
            },
            master_seed: source.seed,
            replay: drawn.replay,
        });
        Self {
            version: chainhull::VERSION,
            mode: source.mode(),
            input: source.input.clone(),
            random,
            input_points: report.input_points,
            hull_points: report.hull_points,
            kind: report.kind,
            label: report.label.clone(),
            artifact: artifact.to_path_buf(),
        }
    }
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).with_context(|| format!("creating dir {}", dir.display()))
        }
        _ => Ok(()),
    }
}

/// `out/hull.json` → `out/hull.run.json`, `fig.svg` → `fig.run.json`.
pub fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("run.json")
}

/// Serialize `record` next to its artifact; returns the sidecar path.
pub fn write_sidecar(record: &RunRecord) -> Result<PathBuf> {
    let path = sidecar_path(&record.artifact);
    ensure_parent(&path)?;
    fs::write(&path, serde_json::to_vec_pretty(record)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "sidecar");
    Ok(path)
}
