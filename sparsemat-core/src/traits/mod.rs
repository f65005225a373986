//! Abstract interfaces over sparse matrices

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::{MatrixOperations, SparseView};
