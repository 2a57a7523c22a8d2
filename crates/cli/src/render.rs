//! Text and SVG renderings of a `HullReport`.

use anyhow::{ensure, Result};
use chainhull::{HullReport, Point};
use std::fmt::Write;

const SIZE: f64 = 600.0;
const MARGIN: f64 = 40.0;

/// Results pane: hull type, counts, numbered vertex list (two decimals).
pub fn text_report(report: &HullReport) -> Result<String> {
    let mut s = String::new();
    writeln!(s, "Hull type: {}", report.label)?;
    writeln!(s, "Input points: {}", report.input_points)?;
    writeln!(s, "Hull points: {}", report.hull_points)?;
    writeln!(s, "Hull vertices:")?;
    for (i, v) in report.vertices.iter().enumerate() {
        writeln!(s, "{}. {v:.2}", i + 1)?;
    }
    Ok(s)
}

/// Axis-aligned view box in data coordinates; always contains the origin.
struct View {
    min_x: f64,
    min_y: f64,
    scale: f64,
}

impl View {
    /// Fails when the extent of the points (plus padding) is not a finite number.
    fn fit(points: &[Point]) -> Result<Self> {
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (0.0f64, 0.0f64, 0.0f64, 0.0f64);
        for p in points {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        let span = (max_x - min_x).max(max_y - min_y).max(1e-9);
        let pad = 0.05 * span;
        let extent = span + 2.0 * pad;
        ensure!(
            extent.is_finite() && (min_x - pad).is_finite() && (min_y - pad).is_finite(),
            "points span too large to plot (x in [{min_x:e}, {max_x:e}], y in [{min_y:e}, {max_y:e}])"
        );
        Ok(Self {
            min_x: min_x - pad,
            min_y: min_y - pad,
            scale: (SIZE - 2.0 * MARGIN) / extent,
        })
    }
    fn px(&self, x: f64) -> f64 {
        MARGIN + (x - self.min_x) * self.scale
    }
    // SVG y grows downwards
    fn py(&self, y: f64) -> f64 {
        SIZE - MARGIN - (y - self.min_y) * self.scale
    }
}

/// Chart with input points as markers, the hull as a closed polyline and
/// reference axes at x=0 and y=0.
///
/// Pre: `points` is non-empty; callers skip rendering otherwise.
pub fn svg_figure(points: &[Point], report: &HullReport) -> Result<String> {
    let view = View::fit(points)?;
    let mut s = String::new();
    writeln!(
        s,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{SIZE}" height="{SIZE}" viewBox="0 0 {SIZE} {SIZE}">"#
    )?;
    writeln!(s, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
    writeln!(
        s,
        r#"<text x="{}" y="24" text-anchor="middle" font-family="sans-serif" font-size="16">Convex hull: {}</text>"#,
        SIZE / 2.0,
        report.label
    )?;
    let (x0, y0) = (view.px(0.0), view.py(0.0));
    writeln!(
        s,
        r#"<line x1="{MARGIN}" y1="{y0:.2}" x2="{}" y2="{y0:.2}" stroke="gray" stroke-width="0.5"/>"#,
        SIZE - MARGIN
    )?;
    writeln!(
        s,
        r#"<line x1="{x0:.2}" y1="{MARGIN}" x2="{x0:.2}" y2="{}" stroke="gray" stroke-width="0.5"/>"#,
        SIZE - MARGIN
    )?;
    if !report.closed_loop.is_empty() {
        let mut coords = String::new();
        for p in &report.closed_loop {
            write!(coords, "{:.2},{:.2} ", view.px(p.x), view.py(p.y))?;
        }
        writeln!(
            s,
            r#"<polyline points="{}" fill="none" stroke="red" stroke-width="2"/>"#,
            coords.trim_end()
        )?;
    }
    for p in points {
        writeln!(
            s,
            r#"<circle cx="{:.2}" cy="{:.2}" r="3" fill="blue"><title>X: {:.2} Y: {:.2}</title></circle>"#,
            view.px(p.x),
            view.py(p.y),
            p.x,
            p.y
        )?;
    }
    writeln!(s, "</svg>")?;
    Ok(s)
}
