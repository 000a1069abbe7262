use crate::error::{ReaderError, Result};

/// Which sheet of a workbook to read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSelector {
    /// Zero-based position in the workbook's sheet list
    Index(usize),
    /// Sheet name, matched exactly
    Name(String),
}

impl Default for SheetSelector {
    fn default() -> Self {
        SheetSelector::Index(0)
    }
}

impl SheetSelector {
    /// Resolve to a position in `sheet_names`.
    ///
    /// Indices are passed through unchecked; the workbook reports out-of-range
    /// positions when the sheet is read.
    pub fn resolve(&self, sheet_names: &[String]) -> Result<usize> {
        match self {
            SheetSelector::Index(index) => Ok(*index),
            SheetSelector::Name(name) => sheet_names
                .iter()
                .position(|n| n == name)
                .ok_or_else(|| ReaderError::SheetNotFound { name: name.clone() }),
        }
    }
}

/// Options for reading a sheet
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Sheet to read
    pub sheet: SheetSelector,
    /// Drop data rows whose cells are all blank when building records
    pub skip_blank_records: bool,
    /// Keep empty cells in records as `null` instead of omitting the key
    pub include_empty: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            sheet: SheetSelector::default(),
            skip_blank_records: true,
            include_empty: false,
        }
    }
}

impl ReadOptions {
    /// Select the sheet by position
    #[must_use]
    pub fn with_sheet_index(mut self, index: usize) -> Self {
        self.sheet = SheetSelector::Index(index);
        self
    }

    /// Select the sheet by name
    #[must_use]
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet = SheetSelector::Name(name.into());
        self
    }

    /// Set whether all-blank data rows are dropped from records
    #[must_use]
    pub fn with_skip_blank_records(mut self, skip: bool) -> Self {
        self.skip_blank_records = skip;
        self
    }

    /// Set whether empty cells appear in records as `null`
    #[must_use]
    pub fn with_include_empty(mut self, include: bool) -> Self {
        self.include_empty = include;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<String> {
        vec!["Data".to_string(), "Summary".to_string()]
    }

    #[test]
    fn test_defaults() {
        let options = ReadOptions::default();
        assert_eq!(options.sheet, SheetSelector::Index(0));
        assert!(options.skip_blank_records);
        assert!(!options.include_empty);
    }

    #[test]
    fn test_resolve_name() {
        let selector = SheetSelector::Name("Summary".to_string());
        assert_eq!(selector.resolve(&names()).unwrap(), 1);
    }

    #[test]
    fn test_resolve_missing_name() {
        let selector = SheetSelector::Name("Missing".to_string());
        let err = selector.resolve(&names()).unwrap_err();
        assert!(matches!(err, ReaderError::SheetNotFound { name } if name == "Missing"));
    }

    #[test]
    fn test_resolve_index_unchecked() {
        assert_eq!(SheetSelector::Index(9).resolve(&names()).unwrap(), 9);
    }
}
