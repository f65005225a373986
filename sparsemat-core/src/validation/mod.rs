//! Validation utilities with no I/O dependencies

pub mod bounds;

pub use bounds::{validate_bounds, validate_index};
