//! JSON rendering of extracted rows and records
//!
//! - Rows: array of arrays `[["Name", "Age"], ["Alice", 30]]`
//! - Records: array of objects `[{"Name": "Alice", "Age": 30}]`

use crate::cell::CellValue;
use crate::error::{ReaderError, Result};
use crate::records::Record;
use serde_json::{Map, Value};

/// Convert a single row into a JSON array
#[must_use]
pub fn row_to_json(row: &[CellValue]) -> Value {
    Value::Array(row.iter().map(CellValue::to_json).collect())
}

/// Convert rows into a JSON array of arrays
#[must_use]
pub fn rows_to_json(rows: &[Vec<CellValue>]) -> Value {
    Value::Array(rows.iter().map(|row| row_to_json(row)).collect())
}

/// Convert records into a JSON array of objects, keeping column order
#[must_use]
pub fn records_to_json(records: &[Record]) -> Value {
    Value::Array(
        records
            .iter()
            .map(|record| {
                let object: Map<String, Value> = record
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect();
                Value::Object(object)
            })
            .collect(),
    )
}

/// Render a JSON value as text
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn to_json_string(value: &Value, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    text.map_err(|e| ReaderError::Serialize(format!("JSON write error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rows_to_json() {
        let rows = vec![
            vec![CellValue::from("Name"), CellValue::from("Age")],
            vec![CellValue::from("Alice"), CellValue::Float(30.0)],
        ];
        assert_eq!(
            rows_to_json(&rows),
            json!([["Name", "Age"], ["Alice", 30.0]])
        );
    }

    #[test]
    fn test_records_to_json() {
        let mut record = Record::new();
        record.insert("Name".to_string(), CellValue::from("Bob"));
        record.insert("Age".to_string(), CellValue::from("25"));

        let value = records_to_json(&[record]);
        assert_eq!(value, json!([{"Name": "Bob", "Age": "25"}]));
    }

    #[test]
    fn test_to_json_string() {
        let value = rows_to_json(&[vec![CellValue::Int(1), CellValue::Null]]);
        assert_eq!(to_json_string(&value, false).unwrap(), "[[1,null]]");
        assert!(to_json_string(&value, true).unwrap().contains('\n'));
    }

    #[test]
    fn test_empty() {
        assert_eq!(to_json_string(&records_to_json(&[]), false).unwrap(), "[]");
    }
}
