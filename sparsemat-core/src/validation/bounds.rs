//! Entry bounds validation
//!
//! [`SparseMatrix::set`](crate::SparseMatrix::set) does not check
//! coordinates against the declared shape. These checks are opt-in.

use crate::coord::MatrixEntry;
use crate::error::{Result, SparseError};
use crate::traits::SparseView;

/// Check a single coordinate against `(rows, cols)`
pub fn validate_index(row: usize, col: usize, rows: usize, cols: usize) -> Result<()> {
    if row >= rows || col >= cols {
        return Err(SparseError::IndexOutOfBounds {
            row,
            col,
            rows,
            cols,
        });
    }
    Ok(())
}

/// Check every stored entry against the declared dimensions
///
/// Reports the first offending entry in row-major order so the result is
/// the same regardless of storage iteration order.
pub fn validate_bounds<M: SparseView>(matrix: &M) -> Result<()> {
    let (rows, cols) = matrix.dimensions();
    let mut first: Option<MatrixEntry<M::Element>> = None;

    matrix.for_each_entry(|entry| {
        if entry.row >= rows || entry.col >= cols {
            let earlier = first.is_some_and(|f| f.coord() <= entry.coord());
            if !earlier {
                first = Some(entry);
            }
        }
    });

    match first {
        Some(entry) => validate_index(entry.row, entry.col, rows, cols),
        None => Ok(()),
    }
}
