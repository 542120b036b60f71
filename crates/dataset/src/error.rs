//! Error types for the dataset crate.

use thiserror::Error;

/// Errors that can occur while loading the hazard table.
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

/// Result type for load operations.
pub type Result<T> = std::result::Result<T, DataLoadError>;
