//! CSV ingestion: two named numeric columns into a `PairedSample`
//!
//! Header names are trimmed before matching, so `" gdp_value "` matches
//! `gdp_value`. Columns other than X and Y (dates, labels) are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use csv::{ReaderBuilder, Trim};
use pairstats_core::PairedSample;

/// Load the X and Y columns of a CSV file.
pub fn load_csv(path: &Path, delimiter: char, x_column: &str, y_column: &str) -> Result<PairedSample> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    load_columns(file, delimiter, x_column, y_column)
        .with_context(|| format!("cannot load {}", path.display()))
}

/// Load the X and Y columns from any CSV reader.
pub fn load_columns<R: Read>(
    reader: R,
    delimiter: char,
    x_column: &str,
    y_column: &str,
) -> Result<PairedSample> {
    let delimiter = u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| anyhow!("delimiter must be a single ASCII character, got {:?}", delimiter))?;

    let mut csv_reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers().context("cannot read header row")?.clone();
    let x_idx = column_index(&headers, x_column)?;
    let y_idx = column_index(&headers, y_column)?;

    let mut x = Vec::new();
    let mut y = Vec::new();
    for (i, record) in csv_reader.records().enumerate() {
        let row = i + 1;
        let record = record.with_context(|| format!("malformed CSV at row {}", row))?;
        x.push(parse_cell(&record, x_idx, x_column, row)?);
        y.push(parse_cell(&record, y_idx, y_column, row)?);
    }

    tracing::debug!(rows = x.len(), x_column, y_column, "loaded CSV columns");
    Ok(PairedSample::from_vecs(x, y)?)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| {
            let available: Vec<&str> = headers.iter().collect();
            anyhow!(
                "column '{}' not found (available: {})",
                name,
                available.join(", ")
            )
        })
}

fn parse_cell(record: &csv::StringRecord, idx: usize, column: &str, row: usize) -> Result<f64> {
    let Some(raw) = record.get(idx) else {
        bail!("row {} has no value for column '{}'", row, column);
    };
    raw.trim()
        .parse::<f64>()
        .with_context(|| format!("row {}: column '{}' value {:?} is not a number", row, column, raw))
}
