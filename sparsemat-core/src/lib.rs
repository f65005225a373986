//! sparsemat-core - sparse integer matrix model
//!
//! This crate provides the sparse matrix type, its arithmetic and the
//! textual matrix format. It performs no file I/O.
//!
//! ```
//! use sparsemat_core::SparseMatrix;
//!
//! let a: SparseMatrix = SparseMatrix::from_entries(2, 2, [(0, 0, 1), (0, 1, 2), (1, 0, 3), (1, 1, 4)]);
//! let identity: SparseMatrix = SparseMatrix::from_entries(2, 2, [(0, 0, 1), (1, 1, 1)]);
//!
//! assert_eq!(a.multiply(&identity).unwrap(), a);
//! assert!(a.subtract(&a).unwrap().is_zero());
//! ```

pub mod coord;
pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod traits;
pub mod validation;

pub use coord::{Coord, MatrixEntry};
pub use error::{ErrorCategory, Result, SparseError};
pub use format::{encode_matrix, parse_matrix, EncodeOptions};
pub use matrix::SparseMatrix;
pub use traits::{MatrixElement, MatrixOperations, SparseView};
pub use validation::validate_bounds;
