//! Textual matrix format
//!
//! ```text
//! rows=<rows>
//! cols=<cols>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! Pure string encoding and decoding; reading and writing files lives in
//! the I/O crate.

pub mod constants;
pub mod text;

pub use text::{encode_matrix, parse_entry, parse_header, parse_matrix, EncodeOptions};
