//! The four extractors: rows, headers, body and records.
//!
//! Every path-based call opens and parses the workbook again; nothing is cached
//! between calls.

use crate::cell::CellValue;
use crate::error::Result;
use crate::options::ReadOptions;
use crate::records::{build_records, Record};
use crate::workbook::{CalamineWorkbook, Row, Workbook};
use std::path::Path;

/// Reads one sheet of a workbook according to [`ReadOptions`]
#[derive(Debug, Clone, Default)]
pub struct ExcelReader {
    options: ReadOptions,
}

impl ExcelReader {
    /// Create a reader for the first sheet with default options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with options
    #[must_use]
    pub fn with_options(options: ReadOptions) -> Self {
        ExcelReader { options }
    }

    /// Get the reader options
    #[must_use]
    pub fn options(&self) -> &ReadOptions {
        &self.options
    }

    // ===== File-backed =====

    /// All rows of the selected sheet, header row included
    pub fn rows<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Row>> {
        self.rows_from(&mut CalamineWorkbook::open(path)?)
    }

    /// The header row of the selected sheet, or empty if the sheet has no rows
    pub fn headers<P: AsRef<Path>>(&self, path: P) -> Result<Vec<CellValue>> {
        self.headers_from(&mut CalamineWorkbook::open(path)?)
    }

    /// Every row after the header row
    pub fn body<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Row>> {
        self.body_from(&mut CalamineWorkbook::open(path)?)
    }

    /// One record per data row, keyed by the header row
    pub fn records<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Record>> {
        self.records_from(&mut CalamineWorkbook::open(path)?)
    }

    // ===== Any backend =====

    /// All rows of the selected sheet of an already opened workbook
    pub fn rows_from<W: Workbook>(&self, workbook: &mut W) -> Result<Vec<Row>> {
        let index = self.options.sheet.resolve(&workbook.sheet_names())?;
        let rows = workbook.sheet_rows(index)?;
        tracing::debug!("Read {} rows from sheet {}", rows.len(), index);
        Ok(rows)
    }

    /// Header row of an already opened workbook
    pub fn headers_from<W: Workbook>(&self, workbook: &mut W) -> Result<Vec<CellValue>> {
        Ok(self.rows_from(workbook)?.into_iter().next().unwrap_or_default())
    }

    /// Data rows of an already opened workbook
    pub fn body_from<W: Workbook>(&self, workbook: &mut W) -> Result<Vec<Row>> {
        Ok(self.rows_from(workbook)?.into_iter().skip(1).collect())
    }

    /// Records of an already opened workbook
    pub fn records_from<W: Workbook>(&self, workbook: &mut W) -> Result<Vec<Record>> {
        let rows = self.rows_from(workbook)?;
        let records = build_records(&rows, &self.options);
        tracing::debug!("Built {} records from {} rows", records.len(), rows.len());
        Ok(records)
    }
}

fn reader_for(sheet_index: usize) -> ExcelReader {
    ExcelReader::with_options(ReadOptions::default().with_sheet_index(sheet_index))
}

/// Rows of the sheet at `sheet_index`, each row a list of cells
///
/// # Example
/// ```no_run
/// use sheetrows_reader::rows_from_excel;
///
/// // [["Name", "Age"], ["Alice", 30.0]]
/// let rows = rows_from_excel("people.xlsx", 0).unwrap();
/// ```
pub fn rows_from_excel<P: AsRef<Path>>(path: P, sheet_index: usize) -> Result<Vec<Row>> {
    reader_for(sheet_index).rows(path)
}

/// Header row of the sheet at `sheet_index`
pub fn headers_from_excel<P: AsRef<Path>>(path: P, sheet_index: usize) -> Result<Vec<CellValue>> {
    reader_for(sheet_index).headers(path)
}

/// Rows after the header row of the sheet at `sheet_index`
pub fn contents_from_excel<P: AsRef<Path>>(path: P, sheet_index: usize) -> Result<Vec<Row>> {
    reader_for(sheet_index).body(path)
}

/// Header-keyed records of the sheet at `sheet_index`
///
/// # Example
/// ```no_run
/// use sheetrows_reader::contents_as_json_from_excel;
///
/// // [{"Name": "Alice", "Age": 30.0}]
/// let records = contents_as_json_from_excel("people.xlsx", 0).unwrap();
/// ```
pub fn contents_as_json_from_excel<P: AsRef<Path>>(
    path: P,
    sheet_index: usize,
) -> Result<Vec<Record>> {
    reader_for(sheet_index).records(path)
}
