use super::SheetName;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal problems while loading the workbook. Any of these aborts startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid JSON: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Workbook has no {0} sheet")]
    MissingSheet(SheetName),

    #[error("Sheet {0} is not a list of rows")]
    NotAList(SheetName),

    #[error("{sheet} row {row} is malformed: {source}")]
    InvalidRow {
        sheet: SheetName,
        row: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("{sheet} has a duplicate key {key}")]
    DuplicateKey { sheet: SheetName, key: String },

    #[error("Found {count} data problems and strict references are enabled")]
    StrictReferences { count: usize },
}
