//! Batch classification of measured intervals from a CSV file.
//!
//! Input columns: `d1, d2, dt1, dt2` (any numeric dtype; extra columns are
//! ignored). Each row is evaluated against one shared domain and norm. A row
//! that fails validation is reported with its error and does not stop the run.

use anyhow::{Context, Result};
use gauge::api::{evaluate, verdict_color, Domain, FuzzyInterval};
use polars::prelude::*;
use serde_json::{json, Value};
use std::path::Path;

use crate::input::IntervalSpec;
use crate::provenance::ERROR_KEY;
use crate::report::angles;

pub const COLUMNS: [&str; 4] = ["d1", "d2", "dt1", "dt2"];

/// One CSV row; `None` where a cell is empty or null.
pub type Row = [Option<f64>; 4];

/// Read the four interval columns of `path` as `f64`.
pub fn read_rows(path: &Path) -> Result<Vec<Row>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "batch_input_shape");

    let mut columns: Vec<Vec<Option<f64>>> = Vec::with_capacity(COLUMNS.len());
    for name in COLUMNS {
        let series = df
            .column(name)
            .with_context(|| format!("missing column {name:?}"))?
            .cast(&DataType::Float64)
            .with_context(|| format!("column {name:?} is not numeric"))?;
        columns.push(series.f64()?.into_iter().collect());
    }
    Ok((0..df.height())
        .map(|i| [columns[0][i], columns[1][i], columns[2][i], columns[3][i]])
        .collect())
}

/// Evaluate every row; one JSON object per row, in input order.
pub fn classify_rows(domain: &Domain, norm: &FuzzyInterval, rows: &[Row]) -> Vec<Value> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| classify_row(i, domain, norm, row))
        .collect()
}

fn classify_row(i: usize, domain: &Domain, norm: &FuzzyInterval, row: &Row) -> Value {
    let [Some(d1), Some(d2), Some(dt1), Some(dt2)] = *row else {
        tracing::warn!(row = i, "empty cell");
        return json!({ "row": i, "error": "empty cell" });
    };
    let spec = IntervalSpec { d1, d2, dt1, dt2 };
    match evaluate(domain, norm, &spec.to_interval()) {
        Ok(r) => json!({
            "row": i,
            "value": spec,
            "verdict": r.verdict.as_str(),
            "color": verdict_color(r.verdict),
            "angles": angles(&r.value),
        }),
        Err(err) => {
            tracing::warn!(row = i, %err, "rejected");
            json!({ "row": i, "value": spec, "error": err.to_string() })
        }
    }
}

/// Tally of verdict names (plus `ERROR_KEY`) over classified rows.
pub fn summarize(results: &[Value]) -> Value {
    let mut counts = serde_json::Map::new();
    for r in results {
        let key = r["verdict"].as_str().unwrap_or(ERROR_KEY).to_string();
        let n = counts.get(&key).and_then(Value::as_u64).unwrap_or(0);
        counts.insert(key, json!(n + 1));
    }
    Value::Object(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn setup() -> (Domain, FuzzyInterval) {
        (
            Domain::new(0.0, 100.0).unwrap(),
            FuzzyInterval::new(40.0, 60.0, 5.0, 5.0).unwrap(),
        )
    }

    #[test]
    fn rows_classify_independently() {
        let (d, norm) = setup();
        let rows = [
            [Some(50.0), Some(50.0), Some(2.0), Some(2.0)],
            [Some(65.0), Some(70.0), Some(2.0), Some(2.0)],
            [Some(70.0), Some(60.0), Some(0.0), Some(0.0)],
            [Some(90.0), None, Some(1.0), Some(1.0)],
            [Some(90.0), Some(95.0), Some(1.0), Some(1.0)],
        ];
        let out = classify_rows(&d, &norm, &rows);
        assert_eq!(out[0]["verdict"], "full-match");
        assert_eq!(out[1]["verdict"], "partial-match");
        assert!(out[2]["error"].as_str().unwrap().contains("kernel_left"));
        assert_eq!(out[3]["error"], "empty cell");
        assert_eq!(out[4]["verdict"], "no-match");
        let summary = summarize(&out);
        assert_eq!(summary["error"], 2);
        assert_eq!(summary["no-match"], 1);
    }

    #[test]
    fn reads_integer_and_float_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("readings.csv");
        fs::write(&path, "label,d1,d2,dt1,dt2\na,50,50,2,2\nb,65.5,70,2,2.5\n").unwrap();
        let rows = read_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], [Some(50.0), Some(50.0), Some(2.0), Some(2.0)]);
        assert_eq!(rows[1][0], Some(65.5));
    }

    #[test]
    fn missing_column_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "d1,d2,dt1\n1,2,3\n").unwrap();
        let err = read_rows(&path).unwrap_err();
        assert!(format!("{err:#}").contains("dt2"));
    }
}
