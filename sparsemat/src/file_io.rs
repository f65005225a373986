//! File I/O for text matrix files
//!
//! Each call opens, fully reads or writes, and closes its file before
//! returning. Loads are all-or-nothing: a parse failure anywhere in the
//! file yields an error and no matrix.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use sparsemat_core::{
    encode_matrix, parse_matrix, validate_bounds, MatrixElement, Result, SparseError,
    SparseMatrix,
};
use tracing::{debug, warn};

use crate::config::IoConfig;

/// Entry point for loading and saving matrix files
pub struct MatrixFile;

impl MatrixFile {
    /// Load a matrix with the default [`IoConfig`]
    ///
    /// # Errors
    ///
    /// - `NotFound` if `path` does not exist
    /// - `Format` if the content is not a valid matrix description
    /// - `Io` for any other read failure
    pub fn load<T: MatrixElement, P: AsRef<Path>>(path: P) -> Result<SparseMatrix<T>> {
        Self::load_with_config(path, &IoConfig::default())
    }

    /// Load a matrix, applying `config`
    ///
    /// With `bounds_check` enabled an entry outside the declared shape
    /// fails the load with `IndexOutOfBounds`.
    pub fn load_with_config<T: MatrixElement, P: AsRef<Path>>(
        path: P,
        config: &IoConfig,
    ) -> Result<SparseMatrix<T>> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| map_io_error(e, path))?;
        let text = decode_utf8(&bytes)?;
        let matrix = parse_matrix::<T>(text)?;

        if config.bounds_check {
            if let Err(e) = validate_bounds(&matrix) {
                warn!(path = %path.display(), error = %e, "matrix entry outside declared shape");
                return Err(e);
            }
        }

        debug!(
            path = %path.display(),
            rows = matrix.rows(),
            cols = matrix.cols(),
            nnz = matrix.nnz(),
            element = T::NAME,
            "loaded matrix"
        );
        Ok(matrix)
    }

    /// Save a matrix with the default [`IoConfig`]
    ///
    /// Missing parent directories are created and an existing file is
    /// overwritten.
    pub fn save<T: MatrixElement, P: AsRef<Path>>(matrix: &SparseMatrix<T>, path: P) -> Result<()> {
        Self::save_with_config(matrix, path, &IoConfig::default())
    }

    /// Save a matrix, applying `config`
    pub fn save_with_config<T: MatrixElement, P: AsRef<Path>>(
        matrix: &SparseMatrix<T>,
        path: P,
        config: &IoConfig,
    ) -> Result<()> {
        let path = path.as_ref();
        if config.create_parent_dirs {
            create_parent_dirs(path)?;
        }

        let text = encode_matrix(matrix, &config.encode_options());
        fs::write(path, text)?;

        debug!(
            path = %path.display(),
            rows = matrix.rows(),
            cols = matrix.cols(),
            nnz = matrix.nnz(),
            "saved matrix"
        );
        Ok(())
    }

    /// Save a matrix as JSON (`rows`, `cols`, row-major `entries`)
    #[cfg(feature = "serde")]
    pub fn save_json<T, P>(matrix: &SparseMatrix<T>, path: P) -> Result<()>
    where
        T: MatrixElement + serde::Serialize,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        create_parent_dirs(path)?;
        let json = serde_json::to_string_pretty(matrix).map_err(std::io::Error::from)?;
        fs::write(path, json)?;
        debug!(path = %path.display(), nnz = matrix.nnz(), "saved matrix as json");
        Ok(())
    }

    /// Load a matrix written by [`save_json`](Self::save_json)
    #[cfg(feature = "serde")]
    pub fn load_json<T, P>(path: P) -> Result<SparseMatrix<T>>
    where
        T: MatrixElement + serde::de::DeserializeOwned,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| map_io_error(e, path))?;
        let matrix: SparseMatrix<T> = serde_json::from_slice(&bytes).map_err(|e| {
            SparseError::format(e.line(), format!("invalid matrix json: {e}"))
        })?;
        debug!(path = %path.display(), nnz = matrix.nnz(), "loaded matrix from json");
        Ok(matrix)
    }
}

fn map_io_error(error: std::io::Error, path: &Path) -> SparseError {
    match error.kind() {
        ErrorKind::NotFound => SparseError::NotFound {
            path: path.to_path_buf(),
        },
        _ => SparseError::Io(error),
    }
}

/// Invalid UTF-8 is a format problem, reported on the line it occurs in
fn decode_utf8(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| {
        let valid = &bytes[..e.valid_up_to()];
        let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
        SparseError::format(line, "file is not valid UTF-8")
    })
}

fn create_parent_dirs(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent)?;
            Ok(())
        }
        _ => Ok(()),
    }
}
