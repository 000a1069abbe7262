//! Header-keyed records.
//!
//! Records are built from the same rows the row extractor returns: row 0 names
//! the columns and every later row becomes one [`Record`].

use crate::cell::CellValue;
use crate::options::ReadOptions;
use crate::workbook::Row;
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};

/// Key used for a header cell with no text
pub const EMPTY_HEADER_KEY: &str = "__EMPTY";

/// One data row keyed by header, in column order
pub type Record = IndexMap<String, CellValue>;

/// Text of a header cell as Excel's General format shows it.
///
/// Booleans are upper case. Numbers keep at most ten significant digits and
/// switch to exponent form outside `1e-5..1e11`: `0.3`, `1E+21`, `1.5E-07`.
#[must_use]
pub fn header_text(cell: &CellValue) -> String {
    match cell {
        CellValue::Bool(true) => "TRUE".to_string(),
        CellValue::Bool(false) => "FALSE".to_string(),
        CellValue::Float(f) => general_number(*f),
        other => other.as_str(),
    }
}

fn general_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e11 {
        return format!("{value:.0}");
    }

    let exponent = value.abs().log10().floor() as i32;
    if (-4..=10).contains(&exponent) {
        let significant = if exponent < 0 { 10 + exponent } else { 10 };
        let places = (significant - 1 - exponent).max(0) as usize;
        return strip_zeros(&format!("{value:.places$}")).to_string();
    }

    let text = format!("{value:.5e}");
    let (mantissa, exp) = text.split_once('e').unwrap_or((text.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{}E{sign}{:02}", strip_zeros(mantissa), exp.abs())
}

fn strip_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Derive unique keys from a header row.
///
/// Each key is the cell's [`header_text`]; blank header cells become
/// [`EMPTY_HEADER_KEY`]. A key that is already taken gets the first free
/// numeric suffix: `Name`, `Name_1`, `Name_2`.
#[must_use]
pub fn header_keys(header: &[CellValue]) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::with_capacity(header.len());
    let mut next_suffix: HashMap<String, usize> = HashMap::new();
    let mut keys = Vec::with_capacity(header.len());

    for cell in header {
        let base = if cell.is_blank() {
            EMPTY_HEADER_KEY.to_string()
        } else {
            header_text(cell)
        };

        let key = if taken.contains(&base) {
            let mut suffix = next_suffix.get(&base).copied().unwrap_or(1);
            let mut candidate = format!("{base}_{suffix}");
            while taken.contains(&candidate) {
                suffix += 1;
                candidate = format!("{base}_{suffix}");
            }
            next_suffix.insert(base, suffix + 1);
            candidate
        } else {
            base
        };

        taken.insert(key.clone());
        keys.push(key);
    }

    keys
}

/// Build records from a sheet's rows.
///
/// Returns an empty vec when there is no data row. Columns past the end of the
/// header row get synthesized keys as if their header cell were blank.
#[must_use]
pub fn build_records(rows: &[Row], options: &ReadOptions) -> Vec<Record> {
    let Some((header, body)) = rows.split_first() else {
        return Vec::new();
    };

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut padded = header.clone();
    padded.resize(width, CellValue::Null);
    let keys = header_keys(&padded);

    body.iter()
        .filter(|row| !(options.skip_blank_records && row.iter().all(CellValue::is_null)))
        .map(|row| {
            keys.iter()
                .enumerate()
                .filter_map(|(col, key)| {
                    let value = row.get(col).cloned().unwrap_or_default();
                    if value.is_null() && !options.include_empty {
                        None
                    } else {
                        Some((key.clone(), value))
                    }
                })
                .collect()
        })
        .collect()
}
