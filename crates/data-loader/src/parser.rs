//! Readers that turn a catalog export into raw rows.
//!
//! Two export shapes are supported:
//! - JSON: an array of flat objects, as returned by a REST table endpoint
//!   (`[{"title": "...", "type": "Movie", "release_year": 2019, ...}, ...]`)
//! - CSV: a header row followed by one row per title
//!
//! Parsing only produces `RawRow`s; coercion into typed records happens in
//! `Catalog::load`.

use crate::error::{LoadError, Result};
use crate::types::RawRow;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read rows from a file, choosing the reader by extension (`.json` or `.csv`)
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => read_json_rows(path),
        Some("csv") => read_csv_rows(path),
        _ => Err(LoadError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}

/// Read a JSON array of row objects from disk
pub fn read_json_rows(path: &Path) -> Result<Vec<RawRow>> {
    let content = fs::read_to_string(path)?;
    let rows = parse_json_rows(&content)?;
    debug!("Read {} JSON rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Parse a JSON document holding an array of flat row objects.
///
/// Strings are kept as-is, numbers and booleans are kept in their text form,
/// `null` stays null. Nested arrays or objects are outside the row schema.
pub fn parse_json_rows(content: &str) -> Result<Vec<RawRow>> {
    let document: Value = serde_json::from_str(content).map_err(|e| LoadError::Parse {
        source_name: "json".to_string(),
        reason: e.to_string(),
    })?;

    let Value::Array(items) = document else {
        return Err(LoadError::Parse {
            source_name: "json".to_string(),
            reason: "expected a top-level array of row objects".to_string(),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(row, item)| match item {
            Value::Object(fields) => fields
                .into_iter()
                .map(|(key, value)| json_cell(row, &key, value).map(|cell| (key, cell)))
                .collect::<Result<RawRow>>(),
            other => Err(LoadError::Parse {
                source_name: "json".to_string(),
                reason: format!("row {row} is not an object: {other}"),
            }),
        })
        .collect()
}

/// Convert one JSON value into a nullable text cell
fn json_cell(row: usize, field: &str, value: Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text)),
        Value::Number(number) => Ok(Some(number.to_string())),
        Value::Bool(flag) => Ok(Some(flag.to_string())),
        nested @ (Value::Array(_) | Value::Object(_)) => Err(LoadError::InvalidValue {
            row,
            field: field.to_string(),
            value: nested.to_string(),
        }),
    }
}

/// Read a CSV export with a header row from disk
pub fn read_csv_rows(path: &Path) -> Result<Vec<RawRow>> {
    let file = fs::File::open(path)?;
    let rows = parse_csv_rows(file)?;
    debug!("Read {} CSV rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Parse CSV rows from any reader.
///
/// Header names become row keys; empty cells become null, matching how a
/// dataframe reader treats blank fields.
pub fn parse_csv_rows<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(key, cell)| {
                let cell = if cell.is_empty() {
                    None
                } else {
                    Some(cell.to_string())
                };
                (key.to_string(), cell)
            })
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

/// Parse a release year the way a lenient numeric coercion would.
///
/// Example: "2019" -> Some(2019)
///          "2019.0" -> Some(2019)
///          "n/a", "", "2019.5" -> None
pub fn parse_release_year(raw: Option<&str>) -> Option<u16> {
    let text = raw?.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(year) = text.parse::<i64>() {
        return u16::try_from(year).ok();
    }
    let value = text.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value >= 0.0 && value <= f64::from(u16::MAX) {
        Some(value as u16)
    } else {
        None
    }
}
