// plotdesk/src/error.rs

use thiserror::Error;

/// Failures while turning raw file content into a validated plot record.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file extension did not map to a known data format.
    #[error("unsupported file type")]
    UnsupportedFormat,

    /// CSV is declared but has no reader yet; surfaced instead of producing
    /// an empty record.
    #[error("CSV loading is not implemented")]
    CsvNotImplemented,

    #[error("file not found")]
    SourceNotFound,

    #[error("invalid JSON: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    #[error("missing required keys: {}", .0.join(", "))]
    MissingRequiredKeys(Vec<&'static str>),

    #[error("'data' must be an array of numbers")]
    InvalidDataShape,

    #[error("missing or invalid 'steps' key")]
    MissingOrInvalidSteps,

    #[error("invalid step size format: {0}")]
    InvalidStepSizeFormat(String),

    #[error("unexpected error: {0}")]
    Internal(String),
}

/// Failures while resolving a plot record into drawable coordinates.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("mismatch between number of x- and y-values ({x_len} vs {y_len})")]
    AxisLengthMismatch { x_len: usize, y_len: usize },

    /// Plotting was requested before a record was loaded successfully.
    #[error("no data loaded")]
    NotLoaded,
}
