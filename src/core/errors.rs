// src/core/errors.rs

#[derive(Debug, thiserror::Error)]
pub enum InterpretError {
    /// An array or nested sequence does not have the shape the operation needs.
    #[error("Shape Error: {0}")]
    Shape(String),

    /// A feature entry is absent, null or NaN.
    #[error("Missing Value: feature entry at row {row}, column {column} is missing")]
    MissingValue { row: usize, column: usize },

    #[error("Length Mismatch: expected {expected} {what}, got {got}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    /// A classification label that cannot index into the score columns.
    #[error("Invalid Label: label {label} at row {row} is not a class index below {n_classes}")]
    InvalidLabel {
        row: usize,
        label: f64,
        n_classes: usize,
    },

    /// A frame column looked up by name does not exist.
    #[error("Unknown Column: no column named '{0}'")]
    UnknownColumn(String),

    #[error("Model Error: {0}")]
    Model(String),

    #[error("Ndarray Error: ndarray ShapeError: {0}")]
    Ndarray(#[from] ndarray::ShapeError),
}

impl InterpretError {
    pub(crate) fn length_mismatch(what: &'static str, expected: usize, got: usize) -> Self {
        InterpretError::LengthMismatch { what, expected, got }
    }
}

// Convenience type alias for Result
pub type Result<T> = std::result::Result<T, InterpretError>;
