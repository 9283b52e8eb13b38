//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while loading the transaction file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Data file has no header row")]
    MissingHeaders,

    #[error("Required column missing from header: {0}")]
    MissingColumn(String),

    #[error("Row {row}: invalid number in column '{column}': {value:?}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },
}

/// Errors surfaced by the summarizer.
///
/// Everything except `ArithmeticAmbiguity` is an invalid-input condition.
#[derive(Error, Debug, PartialEq)]
pub enum SummarizeError {
    #[error("Cannot summarize an empty dataset")]
    EmptyDataset,

    /// `index` is the 0-based position of the record in the dataset
    #[error("Record at index {index} has no value for field '{field}'")]
    MissingField { field: String, index: usize },

    #[error("At least 2 metrics are required, got {0}")]
    NotEnoughMetrics(usize),

    #[error("Malformed group key: {0}")]
    MalformedGroupKey(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    #[error("Profit margin undefined for group '{key}': primary metric sums to zero")]
    ArithmeticAmbiguity { key: String },
}

/// Errors from descriptive statistics
#[derive(Error, Debug, PartialEq)]
pub enum StatsError {
    #[error("Series lengths differ: {0} vs {1}")]
    LengthMismatch(usize, usize),

    #[error("At least 2 observations required, got {0}")]
    NotEnoughObservations(usize),
}

/// Errors that can occur during chart generation
#[derive(Error, Debug, PartialEq)]
pub enum ChartError {
    #[error("Summary table has no rows")]
    EmptyTable,

    #[error("No plottable values for chart '{0}'")]
    NoPlottableValues(String),

    #[error("Chart needs at least {0} y series")]
    MissingSeries(usize),

    #[error("Series '{0}' is not a column of the summary table")]
    UnknownSeries(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Chart rendering failed: {0}")]
    Chart(#[from] ChartError),
}
