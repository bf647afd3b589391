//! Error types for the trend_cycle crate

use polars::prelude::PolarsError;
use thiserror::Error;

/// Custom error types for the trend_cycle crate
#[derive(Debug, Error)]
pub enum FilterError {
    /// Neither period factors nor a date variable could produce a time axis
    #[error("No usable time axis: supply period factor labels or a date variable")]
    MissingTimeAxis,

    /// Error from invalid filter parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from a variable's series failing numeric validation
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Error related to dataset access or column conversion
    #[error("Data error: {0}")]
    DataError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from Polars operations
    #[error("Polars error: {0}")]
    PolarsError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, FilterError>;

impl From<polars::prelude::PolarsError> for FilterError {
    fn from(err: PolarsError) -> Self {
        FilterError::PolarsError(err.to_string())
    }
}
