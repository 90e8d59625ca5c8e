//! Error types for the matrix engine, the network and the experiment driver.

use thiserror::Error;

/// Every fallible operation in the crate returns this error.
#[derive(Error, Debug)]
pub enum MlpError {
    /// Element access outside the matrix bounds.
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    Index {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Shape mismatch between operands, or between data and architecture.
    #[error("dimension mismatch in {op}: expected {expected}, got {actual}")]
    Dimension {
        op: &'static str,
        expected: String,
        actual: String,
    },

    /// Nested rows of differing length passed to `Matrix::from_data`.
    #[error("row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid architecture: {0}")]
    Architecture(String),

    #[error("empty dataset: {0}")]
    EmptyDataset(&'static str),

    #[error("{inputs} inputs but {targets} targets")]
    SampleCount { inputs: usize, targets: usize },

    #[error("csv line {line}: {message}")]
    Csv { line: usize, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MlpError {
    pub(crate) fn dimension(
        op: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    ) -> MlpError {
        MlpError::Dimension {
            op,
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }
}

pub type Result<T> = std::result::Result<T, MlpError>;
