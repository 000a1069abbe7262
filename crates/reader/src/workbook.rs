//! Workbook backends.
//!
//! The extractors only need an ordered sheet list and a way to turn one sheet
//! into rows. [`Workbook`] is that seam; [`CalamineWorkbook`] is the file-backed
//! implementation and [`InMemoryWorkbook`] holds rows already in memory.

use crate::cell::CellValue;
use crate::error::{ReaderError, Result};
use calamine::{open_workbook_auto, Data, Reader, Sheets};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// One physical row of a sheet, left to right
pub type Row = Vec<CellValue>;

/// A parsed workbook the extractors can read sheets from
pub trait Workbook {
    /// Sheet names in workbook order
    fn sheet_names(&self) -> Vec<String>;

    /// All rows of the sheet at `index`, top to bottom.
    ///
    /// Fails with [`ReaderError::SheetIndexOutOfRange`] when `index` is not a
    /// position in [`Workbook::sheet_names`].
    fn sheet_rows(&mut self, index: usize) -> Result<Vec<Row>>;
}

/// Convert calamine Data to CellValue
fn data_to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Null,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::String(s.clone()),
        // Excel serial date: days since 1899-12-30
        Data::DateTime(dt) => CellValue::Float(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::String(s.clone()),
        Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::String(e.to_string()),
    }
}

/// Workbook file opened through calamine (xlsx, xlsm, xlsb, xls, ods)
pub struct CalamineWorkbook {
    path: PathBuf,
    inner: Sheets<BufReader<File>>,
}

impl CalamineWorkbook {
    /// Open and parse a workbook file, detecting the format from its extension
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not a supported workbook.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Opening workbook {}", path.display());
        let inner = open_workbook_auto(path).map_err(|source| ReaderError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(CalamineWorkbook {
            path: path.to_path_buf(),
            inner,
        })
    }

    /// Path the workbook was opened from
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Workbook for CalamineWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.inner
            .sheet_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn sheet_rows(&mut self, index: usize) -> Result<Vec<Row>> {
        let names = self.sheet_names();
        let name = names
            .get(index)
            .cloned()
            .ok_or(ReaderError::SheetIndexOutOfRange {
                index,
                count: names.len(),
            })?;

        let range = self
            .inner
            .worksheet_range_at(index)
            .ok_or(ReaderError::SheetIndexOutOfRange {
                index,
                count: names.len(),
            })?
            .map_err(|source| ReaderError::Sheet { name, source })?;

        Ok(range
            .rows()
            .map(|row| row.iter().map(data_to_cell_value).collect())
            .collect())
    }
}

/// Workbook whose sheets are already held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkbook {
    sheets: Vec<(String, Vec<Row>)>,
}

impl InMemoryWorkbook {
    /// Create an empty workbook
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sheet built from any cell-convertible data
    #[must_use]
    pub fn with_sheet<T: Into<CellValue>>(mut self, name: &str, rows: Vec<Vec<T>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        self.sheets.push((name.to_string(), rows));
        self
    }
}

impl Workbook for InMemoryWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|(name, _)| name.clone()).collect()
    }

    fn sheet_rows(&mut self, index: usize) -> Result<Vec<Row>> {
        self.sheets
            .get(index)
            .map(|(_, rows)| rows.clone())
            .ok_or(ReaderError::SheetIndexOutOfRange {
                index,
                count: self.sheets.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::CellErrorType;

    #[test]
    fn test_data_conversion() {
        assert_eq!(data_to_cell_value(&Data::Empty), CellValue::Null);
        assert_eq!(data_to_cell_value(&Data::Int(3)), CellValue::Int(3));
        assert_eq!(data_to_cell_value(&Data::Float(2.5)), CellValue::Float(2.5));
        assert_eq!(
            data_to_cell_value(&Data::String("x".to_string())),
            CellValue::from("x")
        );
        assert_eq!(
            data_to_cell_value(&Data::Error(CellErrorType::Div0)),
            CellValue::from("#DIV/0!")
        );
    }

    #[test]
    fn test_in_memory_sheets() {
        let mut book = InMemoryWorkbook::new()
            .with_sheet("First", vec![vec![1, 2]])
            .with_sheet("Second", vec![vec![3]]);

        assert_eq!(book.sheet_names(), vec!["First", "Second"]);
        assert_eq!(book.sheet_rows(1).unwrap(), vec![vec![CellValue::Int(3)]]);
    }

    #[test]
    fn test_in_memory_index_out_of_range() {
        let mut book = InMemoryWorkbook::new().with_sheet("Only", vec![vec!["a"]]);
        let err = book.sheet_rows(2).unwrap_err();
        assert!(matches!(
            err,
            ReaderError::SheetIndexOutOfRange { index: 2, count: 1 }
        ));
    }

    #[test]
    fn test_open_missing_file() {
        let err = CalamineWorkbook::open("does/not/exist.xlsx").err().unwrap();
        assert!(matches!(err, ReaderError::Open { .. }));
    }
}
