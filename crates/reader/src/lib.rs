//! Row and record extraction for a single sheet of an Excel workbook
//!
//! Opens a workbook, selects one sheet, and returns it in one of four shapes:
//! every row, the header row, the rows after the header, or one header-keyed
//! record per data row.
//!
//! # Examples
//!
//! ## Reading rows from a file
//!
//! ```no_run
//! use sheetrows_reader::{contents_from_excel, headers_from_excel, rows_from_excel};
//!
//! let rows = rows_from_excel("people.xlsx", 0).unwrap();
//! let headers = headers_from_excel("people.xlsx", 0).unwrap();
//! let body = contents_from_excel("people.xlsx", 0).unwrap();
//!
//! assert_eq!(body.len(), rows.len().saturating_sub(1));
//! ```
//!
//! ## Records from any backend
//!
//! ```
//! use sheetrows_reader::{CellValue, ExcelReader, InMemoryWorkbook};
//!
//! let mut book = InMemoryWorkbook::new().with_sheet(
//!     "People",
//!     vec![
//!         vec!["Name", "Age"],
//!         vec!["Alice", "30"],
//!         vec!["Bob", "25"],
//!     ],
//! );
//!
//! let records = ExcelReader::new().records_from(&mut book).unwrap();
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0]["Name"], CellValue::from("Alice"));
//! ```
//!
//! ## Selecting a sheet by name
//!
//! ```no_run
//! use sheetrows_reader::{ExcelReader, ReadOptions};
//!
//! let reader = ExcelReader::with_options(
//!     ReadOptions::default()
//!         .with_sheet_name("Summary")
//!         .with_include_empty(true),
//! );
//! let records = reader.records("report.xlsx").unwrap();
//! ```

mod cell;
mod error;
mod extract;
pub mod json;
mod options;
mod records;
mod workbook;

/// Re-export cell value type.
pub use cell::CellValue;
/// Re-export error types.
pub use error::{ReaderError, Result};
/// Re-export the extractors.
pub use extract::{
    contents_as_json_from_excel, contents_from_excel, headers_from_excel, rows_from_excel,
    ExcelReader,
};
/// Re-export read options.
pub use options::{ReadOptions, SheetSelector};
/// Re-export record building.
pub use records::{build_records, header_keys, header_text, Record, EMPTY_HEADER_KEY};
/// Re-export workbook backends.
pub use workbook::{CalamineWorkbook, InMemoryWorkbook, Row, Workbook};
