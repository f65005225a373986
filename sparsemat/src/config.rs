//! Configuration for reading and writing matrix files

use sparsemat_core::EncodeOptions;

/// Options applied by [`MatrixFile`](crate::MatrixFile) loads and saves
///
/// The default reproduces the plain text format exactly: no bounds check
/// on load, parent directories created on save, no trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IoConfig {
    /// Reject loaded matrices with entries outside `rows x cols`
    pub bounds_check: bool,
    /// Create missing parent directories before saving
    pub create_parent_dirs: bool,
    /// End saved files with a newline
    pub trailing_newline: bool,
}

impl IoConfig {
    /// Config that also validates entry bounds on load
    pub fn strict() -> Self {
        Self::default().with_bounds_check(true)
    }

    /// Enable or disable the bounds check on load
    pub fn with_bounds_check(mut self, bounds_check: bool) -> Self {
        self.bounds_check = bounds_check;
        self
    }

    /// Enable or disable parent directory creation on save
    pub fn with_create_parent_dirs(mut self, create_parent_dirs: bool) -> Self {
        self.create_parent_dirs = create_parent_dirs;
        self
    }

    /// Enable or disable the trailing newline on save
    pub fn with_trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }

    /// Encoder options derived from this config
    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions::default().with_trailing_newline(self.trailing_newline)
    }
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            bounds_check: false,
            create_parent_dirs: true,
            trailing_newline: false,
        }
    }
}
