//! Matrix access traits
//!
//! These describe read access independent of how entries are stored, so
//! validation and rendering code can work against any sparse view.

use super::element::MatrixElement;
use crate::coord::MatrixEntry;

/// Read-only access to a sparse matrix
pub trait SparseView {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get a stored element
    ///
    /// Returns `None` if nothing is stored at the position. Positions
    /// outside the declared dimensions are not an error.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;

    /// Visit every stored entry in unspecified order
    fn for_each_entry<F: FnMut(MatrixEntry<Self::Element>)>(&self, f: F);
}

/// Row/column extraction
pub trait MatrixOperations: SparseView {
    /// All stored entries of a row, in column order
    fn get_row(&self, row_index: usize) -> Vec<MatrixEntry<Self::Element>>;

    /// All stored entries of a column, in row order
    fn get_col(&self, col_index: usize) -> Vec<MatrixEntry<Self::Element>>;
}
