//! Point tables: one row per point, two numeric columns.

use anyhow::{bail, Context, Result};
use mincircle::circle::{validate_points, Point};
use mincircle::Vec2;
use polars::prelude::*;
use std::path::Path;

/// Names of the coordinate columns.
pub struct Columns {
    pub x: String,
    pub y: String,
}

/// Read `(x, y)` rows from a `.csv` or `.parquet` file as f64 points.
///
/// Integer columns are cast; nulls and non-finite values are errors.
pub fn read_points(path: &Path, cols: &Columns) -> Result<Vec<Point>> {
    let lf = match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())
            .with_context(|| format!("scanning {}", path.display()))?,
        Some("csv") => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()
            .with_context(|| format!("scanning {}", path.display()))?,
        _ => bail!("unsupported input {} (want .csv or .parquet)", path.display()),
    };
    let df = lf
        .select([
            col(cols.x.as_str()).cast(DataType::Float64),
            col(cols.y.as_str()).cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading columns {}/{} from {}", cols.x, cols.y, path.display()))?;
    let xs = df.column(cols.x.as_str())?.f64()?;
    let ys = df.column(cols.y.as_str())?.f64()?;
    let mut pts = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => pts.push(Vec2::new(x, y)),
            _ => bail!("row {row} has a missing coordinate"),
        }
    }
    validate_points(&pts).with_context(|| format!("validating {}", path.display()))?;
    Ok(pts)
}
