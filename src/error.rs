//! Error types for loading and processing flight data.
//!
//! Every failure is fatal to a pipeline run; the variants exist so callers and
//! tests can tell the conditions apart, not to enable recovery.

use thiserror::Error;

/// Convenience alias for results using the flight data error type.
pub type FlightDataResult<T> = std::result::Result<T, FlightDataError>;

#[derive(Error, Debug)]
pub enum FlightDataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Sensor {0} not present in dataset bundle")]
    MissingSensor(usize),

    #[error("Column '{column}' not found (available: {available})")]
    MissingColumn { column: String, available: String },

    #[error("Malformed table: {0}")]
    MalformedTable(String),

    #[error("Invalid value '{value}' in column '{column}' at row {row}")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Length mismatch: expected {expected} samples, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("At least one axis is required")]
    NoAxes,

    #[error("Insufficient data: need at least {required} samples, got {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("Invalid filter parameters: {0}")]
    InvalidFilterParameters(String),

    #[error("Expected {expected} legend labels (one per axis plus magnitude), found {found}")]
    LegendLabelCount { expected: usize, found: usize },
}
