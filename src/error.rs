use thiserror::Error;

use crate::loader::LoaderError;

/// Anything that ends the program with a non-zero exit code.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("Could not load ingredient data: {0}")]
    Loader(#[from] LoaderError),

    #[error("Console error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
