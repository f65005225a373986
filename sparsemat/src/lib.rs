//! sparsemat - sparse integer matrices on disk
//!
//! This library loads and saves sparse matrices in the plain text matrix
//! format and re-exports the matrix model and arithmetic from
//! `sparsemat-core`.
//!
//! ## Architecture
//!
//! - **sparsemat-core**: matrix model, arithmetic, text codec and
//!   validation (no I/O)
//! - **sparsemat**: file I/O, configuration, logging and the demo CLI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sparsemat::{MatrixFile, SparseMatrix};
//!
//! fn example() -> sparsemat::Result<()> {
//!     let lhs: SparseMatrix = MatrixFile::load("sample_inputs/matrix1.txt")?;
//!     let rhs: SparseMatrix = MatrixFile::load("sample_inputs/matrix2.txt")?;
//!
//!     let sum = lhs.add(&rhs)?;
//!     MatrixFile::save(&sum, "sample_results/addition_result.txt")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **serde** (default): JSON import/export of matrices
//! - **cli**: dependencies for the `matrix_cli` example

pub use sparsemat_core::{
    // Matrix model
    Coord, MatrixEntry, SparseMatrix,
    // Traits
    MatrixElement, MatrixOperations, SparseView,
    // Text format
    encode_matrix, parse_matrix, EncodeOptions,
    // Error handling
    ErrorCategory, Result, SparseError,
    // Validation
    validate_bounds,
};

pub mod config;
pub mod file_io;

pub use config::IoConfig;
pub use file_io::MatrixFile;
