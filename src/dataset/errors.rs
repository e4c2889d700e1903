//! Dataset loading errors
//!
//! All of these are startup preconditions: the process must not serve
//! traffic if the backing file cannot be loaded.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Dataset loading errors
#[derive(Debug, Error)]
pub enum DatasetError {
    /// File missing, unreadable, or malformed CSV
    #[error("failed to read dataset {}: {source}", path.display())]
    Read { path: PathBuf, source: csv::Error },

    /// Header is missing a column the query layer depends on
    #[error("dataset {} is missing required column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: String },
}
