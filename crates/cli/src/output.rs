//! Point-set persistence: whitespace-delimited rows, one point per row, no header.

use anyhow::{bail, Context, Result};
use ndfront::PointSet;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// `<out>/<label>/<label>.<d>d.<n>.dat`
pub fn data_path(out: &Path, label: &str, dim: usize, count: usize) -> PathBuf {
    out.join(label).join(format!("{label}.{dim}d.{count}.dat"))
}

/// Write `points` to `path` as space-separated scientific floats, creating parent dirs.
pub fn write_points(path: &Path, points: &PointSet) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let columns: Vec<Series> = (0..points.dim())
        .map(|axis| {
            let name = format!("f{}", axis + 1);
            Series::new(name.as_str().into(), points.column(axis))
        })
        .collect();
    let mut df = DataFrame::new(columns)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(false)
        .with_separator(b' ')
        .with_float_scientific(Some(true))
        .with_float_precision(Some(18))
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Read a headerless, space-separated point file back into a `PointSet`.
pub fn read_points(path: &Path) -> Result<PointSet> {
    let df = LazyCsvReader::new(path)
        .with_has_header(false)
        .with_separator(b' ')
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_points_shape");
    let mut columns: Vec<Vec<f64>> = Vec::with_capacity(df.width());
    for series in df.get_columns() {
        let floats = series.cast(&DataType::Float64)?;
        let mut values = Vec::with_capacity(floats.len());
        for v in floats.f64()?.into_iter() {
            match v {
                Some(x) => values.push(x),
                None => bail!("missing value in column {}", series.name()),
            }
        }
        columns.push(values);
    }
    let rows: Vec<Vec<f64>> = (0..df.height())
        .map(|r| columns.iter().map(|c| c[r]).collect())
        .collect();
    Ok(PointSet::from_rows(&rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn data_path_follows_label_layout() {
        let p = data_path(Path::new("sets"), "cliffFour", 4, 100);
        assert_eq!(p, Path::new("sets/cliffFour/cliffFour.4d.100.dat"));
    }

    #[test]
    fn written_rows_are_whitespace_delimited_floats() {
        let dir = tempdir().unwrap();
        let path = data_path(dir.path(), "linear", 2, 3);
        let set = PointSet::from_rows(&[[0.25, 0.75], [0.5, 0.5], [0.125, 0.875]]).unwrap();
        write_points(&path, &set).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let rows: Vec<Vec<f64>> = text
            .lines()
            .map(|l| l.split_whitespace().map(|t| t.parse().unwrap()).collect())
            .collect();
        assert_eq!(rows, set.rows());
    }

    #[test]
    fn read_points_recovers_written_set() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("concave.3d.2.dat");
        let set = PointSet::from_rows(&[[0.6, 0.0, 0.8], [0.0, 0.8, 0.6]]).unwrap();
        write_points(&path, &set).unwrap();
        let back = read_points(&path).unwrap();
        assert_eq!(back.dim(), 3);
        assert_eq!(back.len(), 2);
        for (a, b) in back.iter().zip(set.iter()) {
            assert!((a - b).norm() < 1e-15);
        }
    }
}
