//! Path loading for the CLI: CSV (`x`,`y` columns) or JSON (`[[x, y], ...]`).

use anyhow::{anyhow, bail, Context, Result};
use enclosed::{Point, Vec2};
use polars::prelude::*;
use std::fs;
use std::path::Path;

/// Load a point path from `input`, dispatching on the file extension.
pub fn load_path(input: &str) -> Result<Vec<Point>> {
    let path = Path::new(input);
    let points = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => load_csv(path)?,
        Some("json") => load_json(path)?,
        other => bail!("unsupported input extension {other:?} (expected .csv or .json)"),
    };
    tracing::info!(input, points = points.len(), "loaded path");
    Ok(points)
}

fn load_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("reading {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("expected numeric x,y columns in {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys)
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Vec2::new(x, y)),
            _ => Err(anyhow!("row {row}: missing coordinate")),
        })
        .collect()
}

fn load_json(path: &Path) -> Result<Vec<Point>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let coords: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("expected [[x, y], ...] in {}", path.display()))?;
    Ok(coords.iter().map(|c| Vec2::new(c[0], c[1])).collect())
}
