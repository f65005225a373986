//! Error types for sparse matrix operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building, combining or (de)serializing matrices
#[derive(Debug, Error)]
pub enum SparseError {
    /// The matrix file does not exist
    #[error("could not find matrix file at: {}", .path.display())]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Text does not follow the `rows=` / `cols=` / `(row, col, value)` grammar
    #[error("error reading matrix file: line {line}: {reason}")]
    Format {
        /// 1-based line number of the offending line
        line: usize,
        /// What was wrong with it
        reason: String,
    },

    /// Operand dimensions are incompatible for the requested operation
    #[error("matrix dimensions do not match for {op}: {}x{} vs {}x{}", .lhs.0, .lhs.1, .rhs.0, .rhs.1)]
    DimensionMismatch {
        /// Operation name
        op: &'static str,
        /// Left operand as (rows, cols)
        lhs: (usize, usize),
        /// Right operand as (rows, cols)
        rhs: (usize, usize),
    },

    /// Checked accumulation overflowed the element type
    #[error("integer overflow during {op} at ({row}, {col})")]
    Overflow {
        /// Operation name
        op: &'static str,
        /// Row of the result entry being accumulated
        row: usize,
        /// Column of the result entry being accumulated
        col: usize,
    },

    /// A stored entry lies outside the declared dimensions
    #[error("entry ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        /// Row of the offending entry
        row: usize,
        /// Column of the offending entry
        col: usize,
        /// Declared row count
        rows: usize,
        /// Declared column count
        cols: usize,
    },

    /// Any other filesystem failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SparseError {
    /// Shorthand for a format error on a given line
    pub fn format(line: usize, reason: impl Into<String>) -> Self {
        SparseError::Format {
            line,
            reason: reason.into(),
        }
    }

    /// Coarse classification, handy for matching in callers and tests
    pub fn category(&self) -> ErrorCategory {
        match self {
            SparseError::NotFound { .. } | SparseError::Io(_) => ErrorCategory::Io,
            SparseError::Format { .. } => ErrorCategory::Format,
            SparseError::DimensionMismatch { .. } | SparseError::IndexOutOfBounds { .. } => {
                ErrorCategory::Shape
            }
            SparseError::Overflow { .. } => ErrorCategory::Arithmetic,
        }
    }
}

/// Broad error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Format,
    Shape,
    Arithmetic,
}

/// Result type for sparse matrix operations
pub type Result<T> = std::result::Result<T, SparseError>;
