//! Error types for geoweight

use thiserror::Error;

/// Main error type for geoweight operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid distance function: {name:?} (expected \"Haversine\" or \"Vincenty\")")]
    InvalidMetricName { name: String },

    #[error("Invalid distance transform: {name:?} (expected \"level\" or \"log\")")]
    InvalidTransform { name: String },

    #[error("Length mismatch in {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Column not found: {name:?}")]
    MissingColumn { name: String },

    #[error("Column {name:?} is not {expected}")]
    ColumnType {
        name: String,
        expected: &'static str,
    },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Interrupted by host at row {row}")]
    Interrupted { row: usize },
}

impl Error {
    /// Shorthand for [`Error::LengthMismatch`] when two lengths must agree.
    pub fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
        if expected != actual {
            return Err(Error::LengthMismatch {
                what,
                expected,
                actual,
            });
        }
        Ok(())
    }
}

/// Result type alias for geoweight operations
pub type Result<T> = std::result::Result<T, Error>;
