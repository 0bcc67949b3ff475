//! Loader errors.

use thiserror::Error;

/// Errors that stop a category file from loading.
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// Row numbers count data rows from 1, header excluded
    #[error("Invalid data format in row {row}: {message}")]
    InvalidFormat { row: usize, message: String },

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),
}
