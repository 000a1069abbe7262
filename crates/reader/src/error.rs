use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a workbook
#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("Cannot open workbook {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Cannot read sheet '{name}': {source}")]
    Sheet {
        name: String,
        #[source]
        source: calamine::Error,
    },

    #[error("Sheet index out of range: {index} (workbook has {count} sheets)")]
    SheetIndexOutOfRange { index: usize, count: usize },

    #[error("Sheet not found: {name}")]
    SheetNotFound { name: String },

    #[error("Serialize error: {0}")]
    Serialize(String),
}

pub type Result<T> = std::result::Result<T, ReaderError>;
