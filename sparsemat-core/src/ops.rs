//! Matrix arithmetic: addition, subtraction, multiplication
//!
//! Every operation leaves its operands untouched and returns a freshly
//! owned result. Accumulation is checked; an overflow fails the whole
//! operation and no partial result escapes.

use hashbrown::HashMap;
use tracing::trace;

use crate::coord::Coord;
use crate::error::{Result, SparseError};
use crate::matrix::SparseMatrix;
use crate::traits::MatrixElement;

impl<T: MatrixElement> SparseMatrix<T> {
    /// Element-wise sum
    ///
    /// # Errors
    ///
    /// - `DimensionMismatch` unless both matrices have the same shape
    /// - `Overflow` if a sum does not fit in `T`
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other, "addition")?;
        let result = self.combine(other, "addition", T::checked_add)?;
        trace!(op = "add", nnz = result.nnz(), "combined matrices");
        Ok(result)
    }

    /// Element-wise difference `self - other`
    ///
    /// Entries only present in `other` come out negated.
    ///
    /// # Errors
    ///
    /// Same as [`add`](Self::add).
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other, "subtraction")?;
        let result = self.combine(other, "subtraction", T::checked_sub)?;
        trace!(op = "subtract", nnz = result.nnz(), "combined matrices");
        Ok(result)
    }

    /// Matrix product `self * other`, shaped `self.rows x other.cols`
    ///
    /// `other` is grouped by row once, so each stored entry `(r, k)` of
    /// `self` only meets the entries of row `k` in `other`. Results match a
    /// plain scan over every pair of entries, including zero suppression.
    ///
    /// # Errors
    ///
    /// - `DimensionMismatch` unless `self.cols == other.rows`
    /// - `Overflow` if a product or partial sum does not fit in `T`
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(SparseError::DimensionMismatch {
                op: "multiplication",
                lhs: self.dimensions(),
                rhs: other.dimensions(),
            });
        }

        let mut other_rows: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
        for (coord, &value) in &other.elements {
            other_rows
                .entry(coord.row)
                .or_default()
                .push((coord.col, value));
        }

        let mut result = Self::new(self.rows, other.cols);
        for (lhs, &lhs_value) in &self.elements {
            let Some(row) = other_rows.get(&lhs.col) else {
                continue;
            };
            for &(col, rhs_value) in row {
                let overflow = || SparseError::Overflow {
                    op: "multiplication",
                    row: lhs.row,
                    col,
                };
                let product = lhs_value.checked_mul(rhs_value).ok_or_else(overflow)?;
                let sum = result
                    .get(lhs.row, col)
                    .checked_add(product)
                    .ok_or_else(overflow)?;
                result.set(lhs.row, col, sum);
            }
        }

        trace!(
            op = "multiply",
            lhs_nnz = self.nnz(),
            rhs_nnz = other.nnz(),
            nnz = result.nnz(),
            "multiplied matrices"
        );
        Ok(result)
    }

    fn check_same_shape(&self, other: &Self, op: &'static str) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(SparseError::DimensionMismatch {
                op,
                lhs: self.dimensions(),
                rhs: other.dimensions(),
            });
        }
        Ok(())
    }

    /// Copy `self`, then fold every entry of `other` into it with `apply`
    fn combine(
        &self,
        other: &Self,
        op: &'static str,
        apply: fn(T, T) -> Option<T>,
    ) -> Result<Self> {
        let mut result = self.clone();
        for (&Coord { row, col }, &value) in &other.elements {
            let combined = apply(result.get(row, col), value)
                .ok_or(SparseError::Overflow { op, row, col })?;
            result.set(row, col, combined);
        }
        Ok(result)
    }
}
