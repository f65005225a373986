//! The sparse matrix entity
//!
//! Only non-zero values are stored, keyed by [`Coord`]. Setting a value to
//! zero removes its entry, so `nnz()` is always the number of non-zero cells.

use hashbrown::HashMap;

use crate::coord::{Coord, MatrixEntry};
use crate::traits::{MatrixElement, MatrixOperations, SparseView};

/// Sparse integer matrix backed by a coordinate map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix<T: MatrixElement = i64> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) elements: HashMap<Coord, T>,
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Create an empty `rows x cols` matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            elements: HashMap::new(),
        }
    }

    /// Create a matrix by applying [`set`](Self::set) to each entry in turn
    ///
    /// Zero values are dropped and a repeated coordinate keeps its last value.
    pub fn from_entries<I, E>(rows: usize, cols: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<MatrixEntry<T>>,
    {
        let mut matrix = Self::new(rows, cols);
        for entry in entries {
            let entry = entry.into();
            matrix.set(entry.row, entry.col, entry.value);
        }
        matrix
    }

    /// Declared row count, independent of what is stored
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Declared column count
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.elements.len()
    }

    /// True when no entry is stored
    pub fn is_zero(&self) -> bool {
        self.elements.is_empty()
    }

    /// Value at `(row, col)`, or zero when nothing is stored there
    ///
    /// Lookup is a pure map query; coordinates outside the declared
    /// dimensions simply read as zero.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.elements
            .get(&Coord::new(row, col))
            .copied()
            .unwrap_or(T::ZERO)
    }

    /// Whether a non-zero value is stored at `(row, col)`
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.elements.contains_key(&Coord::new(row, col))
    }

    /// Store `value` at `(row, col)`, removing the entry when `value` is zero
    ///
    /// The coordinate is not checked against `rows`/`cols`. Writing outside
    /// the declared shape is a caller error; use
    /// [`validate_bounds`](crate::validation::validate_bounds) to detect it.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let coord = Coord::new(row, col);
        if value.is_zero() {
            self.elements.remove(&coord);
        } else {
            self.elements.insert(coord, value);
        }
    }

    /// Iterate stored entries in unspecified order
    pub fn entries(&self) -> impl Iterator<Item = MatrixEntry<T>> + '_ {
        self.elements
            .iter()
            .map(|(coord, &value)| MatrixEntry::new(coord.row, coord.col, value))
    }

    /// Stored entries in row-major order
    pub fn sorted_entries(&self) -> Vec<MatrixEntry<T>> {
        let mut entries: Vec<_> = self.entries().collect();
        entries.sort_unstable_by_key(|entry| entry.coord());
        entries
    }
}

impl<T: MatrixElement> SparseView for SparseMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        self.elements.get(&Coord::new(row, col)).copied()
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn nnz(&self) -> usize {
        self.elements.len()
    }

    fn for_each_entry<F: FnMut(MatrixEntry<T>)>(&self, f: F) {
        self.entries().for_each(f);
    }
}

impl<T: MatrixElement> MatrixOperations for SparseMatrix<T> {
    fn get_row(&self, row_index: usize) -> Vec<MatrixEntry<T>> {
        let mut row: Vec<_> = self.entries().filter(|e| e.row == row_index).collect();
        row.sort_unstable_by_key(|e| e.col);
        row
    }

    fn get_col(&self, col_index: usize) -> Vec<MatrixEntry<T>> {
        let mut col: Vec<_> = self.entries().filter(|e| e.col == col_index).collect();
        col.sort_unstable_by_key(|e| e.row);
        col
    }
}

/// Diagnostic rendering: `rows=R`, `cols=C`, then the stored map with
/// `"row,col"` keys in row-major order. Not a parseable format.
impl<T: MatrixElement> core::fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "rows={}", self.rows)?;
        writeln!(f, "cols={}", self.cols)?;
        write!(f, "(elements={{")?;
        for (i, entry) in self.sorted_entries().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "\"{},{}\": {}", entry.row, entry.col, entry.value)?;
        }
        write!(f, "}})")
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct MatrixRecord<T> {
        rows: usize,
        cols: usize,
        entries: Vec<MatrixEntry<T>>,
    }

    impl<T: MatrixElement + Serialize> Serialize for SparseMatrix<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            MatrixRecord {
                rows: self.rows,
                cols: self.cols,
                entries: self.sorted_entries(),
            }
            .serialize(serializer)
        }
    }

    // Goes through `set` so zero entries in the input are dropped
    impl<'de, T: MatrixElement + Deserialize<'de>> Deserialize<'de> for SparseMatrix<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let record = MatrixRecord::<T>::deserialize(deserializer)?;
            Ok(Self::from_entries(
                record.rows,
                record.cols,
                record.entries,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SparseMatrix {
        SparseMatrix::from_entries(2, 2, [(0, 0, 1), (0, 1, 2), (1, 0, 3), (1, 1, 4)])
    }

    #[test]
    fn test_set_then_get() {
        let mut m: SparseMatrix = SparseMatrix::new(3, 3);
        m.set(1, 2, 7);
        assert_eq!(m.get(1, 2), 7);
        m.set(1, 2, -9);
        assert_eq!(m.get(1, 2), -9);
        assert_eq!(m.nnz(), 1);
    }

    #[test]
    fn test_set_zero_removes_entry() {
        let mut m: SparseMatrix = SparseMatrix::new(3, 3);
        m.set(0, 0, 5);
        m.set(0, 0, 0);
        assert_eq!(m.get(0, 0), 0);
        assert!(!m.contains(0, 0));
        assert!(m.is_zero());

        // removing an absent entry is a no-op
        m.set(2, 2, 0);
        assert_eq!(m.nnz(), 0);
    }

    #[test]
    fn test_get_unset_and_out_of_shape() {
        let m = sample();
        assert_eq!(m.get(5, 5), 0);
        assert_eq!(m.get(usize::MAX, 0), 0);
        assert_eq!(m.get_element(5, 5), None);
    }

    #[test]
    fn test_from_entries_drops_zero_and_keeps_last() {
        let m: SparseMatrix = SparseMatrix::from_entries(2, 2, [(0, 0, 1), (0, 1, 0), (0, 0, 8)]);
        assert_eq!(m.nnz(), 1);
        assert_eq!(m.get(0, 0), 8);
    }

    #[test]
    fn test_sorted_entries_row_major() {
        let m: SparseMatrix = SparseMatrix::from_entries(3, 3, [(2, 0, 1), (0, 2, 2), (0, 1, 3)]);
        let coords: Vec<_> = m.sorted_entries().iter().map(|e| (e.row, e.col)).collect();
        assert_eq!(coords, vec![(0, 1), (0, 2), (2, 0)]);
    }

    #[test]
    fn test_row_and_col_access() {
        let m = sample();
        let row: Vec<_> = m.get_row(1).iter().map(|e| e.value).collect();
        assert_eq!(row, vec![3, 4]);
        let col: Vec<_> = m.get_col(1).iter().map(|e| e.value).collect();
        assert_eq!(col, vec![2, 4]);
        assert!(m.get_row(7).is_empty());
    }

    #[test]
    fn test_display() {
        let m = sample();
        assert_eq!(
            m.to_string(),
            "rows=2\ncols=2\n(elements={\"0,0\": 1, \"0,1\": 2, \"1,0\": 3, \"1,1\": 4})"
        );
        let empty: SparseMatrix<i32> = SparseMatrix::new(0, 0);
        assert_eq!(empty.to_string(), "rows=0\ncols=0\n(elements={})");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_json() {
        let m = sample();
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.starts_with("{\"rows\":2,\"cols\":2,\"entries\":[{\"row\":0,\"col\":0,\"value\":1}"));
        let back: SparseMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
