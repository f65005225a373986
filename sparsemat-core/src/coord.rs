//! Coordinates and entries

use crate::traits::MatrixElement;

/// A (row, col) cell position
///
/// Ordering is row-major: by row, then by column within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Position at `row`, `col`
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Coord> for (usize, usize) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.col)
    }
}

/// A single stored value with its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixEntry<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

impl<T: MatrixElement> MatrixEntry<T> {
    /// Entry holding `value` at `row`, `col`
    ///
    /// Nothing stops `value` from being zero here; a zero entry stores
    /// nothing once it goes through [`SparseMatrix::set`](crate::SparseMatrix::set).
    pub const fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }

    /// The entry's position as a map key
    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }
}

impl<T: MatrixElement> From<(usize, usize, T)> for MatrixEntry<T> {
    fn from((row, col, value): (usize, usize, T)) -> Self {
        Self { row, col, value }
    }
}

impl<T: MatrixElement> core::fmt::Display for MatrixEntry<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.col, self.value)
    }
}
