//! Parsing and encoding of the textual matrix format

use core::str::FromStr;

use super::constants::{
    BYTE_ORDER_MARK, COLS_KEY, ENTRY_FIELD_COUNT, FIELD_SEPARATOR, HEADER_LINES, HEADER_SEPARATOR, ROWS_KEY,
};
use crate::coord::MatrixEntry;
use crate::error::{Result, SparseError};
use crate::matrix::SparseMatrix;
use crate::traits::MatrixElement;

/// Options for [`encode_matrix`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// End the output with a newline after the last line
    pub trailing_newline: bool,
}

impl EncodeOptions {
    /// End the output with `\n` after the last line
    pub fn with_trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }
}

/// Parse a `key=<integer>` header line
///
/// The key must equal `expected_key` after trimming, and everything after
/// the first `=` must be a single non-negative integer. Headers such as
/// `cols=3` on the rows line or `rows=2=9` are rejected rather than
/// guessed at. `line_no` is 1-based and only used for error reporting.
pub fn parse_header(line: &str, line_no: usize, expected_key: &str) -> Result<usize> {
    let (key, value) = line.split_once(HEADER_SEPARATOR).ok_or_else(|| {
        SparseError::format(
            line_no,
            format!("expected `{expected_key}=<integer>`, found `{line}`"),
        )
    })?;

    let key = key.trim();
    if key != expected_key {
        return Err(SparseError::format(
            line_no,
            format!("expected key `{expected_key}`, found `{key}`"),
        ));
    }

    let value = value.trim();
    value.parse::<usize>().map_err(|e| {
        SparseError::format(line_no, format!("invalid {expected_key} value `{value}`: {e}"))
    })
}

/// Parse one `(row, col, value)` line
///
/// Returns `Ok(None)` for blank lines. Enclosing parentheses are optional;
/// anything other than exactly three integer fields is an error.
pub fn parse_entry<T: MatrixElement>(line: &str, line_no: usize) -> Result<Option<MatrixEntry<T>>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let inner = trimmed.trim_matches(|c: char| c == '(' || c == ')');
    let fields: Vec<&str> = inner.split(FIELD_SEPARATOR).map(str::trim).collect();
    if fields.len() != ENTRY_FIELD_COUNT {
        return Err(SparseError::format(
            line_no,
            format!("expected `(row, col, value)`, found `{trimmed}`"),
        ));
    }

    let row = parse_field::<usize>(fields[0], "row", line_no)?;
    let col = parse_field::<usize>(fields[1], "col", line_no)?;
    let value = parse_field::<T>(fields[2], "value", line_no)?;

    Ok(Some(MatrixEntry::new(row, col, value)))
}

fn parse_field<V>(field: &str, name: &str, line_no: usize) -> Result<V>
where
    V: FromStr,
    V::Err: core::fmt::Display,
{
    field
        .parse::<V>()
        .map_err(|e| SparseError::format(line_no, format!("invalid {name} `{field}`: {e}")))
}

/// Parse a whole matrix from text
///
/// Entries go through [`SparseMatrix::set`], so a zero value stores
/// nothing and a repeated coordinate keeps its last value. Nothing is
/// returned unless every line parses.
///
/// A leading UTF-8 byte order mark is ignored.
pub fn parse_matrix<T: MatrixElement>(text: &str) -> Result<SparseMatrix<T>> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let mut lines = text.lines();

    let rows_line = lines
        .next()
        .ok_or_else(|| SparseError::format(1, format!("missing `{ROWS_KEY}=` header")))?;
    let rows = parse_header(rows_line, 1, ROWS_KEY)?;

    let cols_line = lines
        .next()
        .ok_or_else(|| SparseError::format(2, format!("missing `{COLS_KEY}=` header")))?;
    let cols = parse_header(cols_line, 2, COLS_KEY)?;

    let mut matrix = SparseMatrix::<T>::new(rows, cols);
    for (idx, line) in lines.enumerate() {
        if let Some(entry) = parse_entry::<T>(line, idx + HEADER_LINES + 1)? {
            matrix.set(entry.row, entry.col, entry.value);
        }
    }

    Ok(matrix)
}

/// Encode a matrix to text, entries in row-major order
///
/// Lines are joined with `\n`; by default there is no trailing newline.
pub fn encode_matrix<T: MatrixElement>(matrix: &SparseMatrix<T>, options: &EncodeOptions) -> String {
    let mut lines = Vec::with_capacity(matrix.nnz() + HEADER_LINES);
    lines.push(format!("{ROWS_KEY}{HEADER_SEPARATOR}{}", matrix.rows()));
    lines.push(format!("{COLS_KEY}{HEADER_SEPARATOR}{}", matrix.cols()));
    lines.extend(matrix.sorted_entries().iter().map(ToString::to_string));

    let mut text = lines.join("\n");
    if options.trailing_newline {
        text.push('\n');
    }
    text
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Encode with default [`EncodeOptions`]
    pub fn to_text(&self) -> String {
        encode_matrix(self, &EncodeOptions::default())
    }
}

impl<T: MatrixElement> FromStr for SparseMatrix<T> {
    type Err = SparseError;

    fn from_str(s: &str) -> Result<Self> {
        parse_matrix(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format_line(err: SparseError) -> usize {
        match err {
            SparseError::Format { line, .. } => line,
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_header() {
        assert_eq!(parse_header("rows=3", 1, ROWS_KEY).unwrap(), 3);
        assert_eq!(parse_header(" cols = 12 ", 2, COLS_KEY).unwrap(), 12);
        assert_eq!(parse_header("rows=0", 1, ROWS_KEY).unwrap(), 0);

        assert!(parse_header("rows", 1, ROWS_KEY).is_err());
        assert!(parse_header("rows=abc", 1, ROWS_KEY).is_err());
        assert!(parse_header("rows=-1", 1, ROWS_KEY).is_err());
        assert!(parse_header("cols=3", 1, ROWS_KEY).is_err());
        assert!(parse_header("rows=", 1, ROWS_KEY).is_err());
        assert!(parse_header("rows=2=9", 1, ROWS_KEY).is_err());
        assert!(parse_header("\u{feff}rows=2", 1, ROWS_KEY).is_err());
    }

    #[test]
    fn test_parse_matrix_with_byte_order_mark() {
        let m: SparseMatrix = parse_matrix("\u{feff}rows=2\ncols=3\n(1, 2, 6)").unwrap();
        assert_eq!(m.dimensions(), (2, 3));
        assert_eq!(m.get(1, 2), 6);

        // only a leading mark is stripped
        let err = parse_matrix::<i64>("rows=2\n\u{feff}cols=3").unwrap_err();
        assert_eq!(format_line(err), 2);
    }

    #[test]
    fn test_extra_separator_in_header_rejected() {
        let err = parse_matrix::<i64>("rows=2=9\ncols=2").unwrap_err();
        match err {
            SparseError::Format { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("2=9"));
            }
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_entry() {
        assert_eq!(
            parse_entry::<i64>("(1, 2, -3)", 3).unwrap(),
            Some(MatrixEntry::new(1, 2, -3))
        );
        assert_eq!(
            parse_entry::<i64>("  (4,5,6)  ", 3).unwrap(),
            Some(MatrixEntry::new(4, 5, 6))
        );
        assert_eq!(
            parse_entry::<i64>("7, 8, 9", 3).unwrap(),
            Some(MatrixEntry::new(7, 8, 9))
        );
        assert_eq!(parse_entry::<i64>("   ", 3).unwrap(), None);

        assert!(parse_entry::<i64>("(1,2)", 3).is_err());
        assert!(parse_entry::<i64>("(1,2,3,4)", 3).is_err());
        assert!(parse_entry::<i64>("(1,2,x)", 3).is_err());
        assert!(parse_entry::<i64>("(-1,2,3)", 3).is_err());
        assert!(parse_entry::<i64>("(1.5,2,3)", 3).is_err());
        assert!(parse_entry::<i32>("(0,0,99999999999)", 3).is_err());
    }

    #[test]
    fn test_parse_matrix() {
        let text = "rows=3\ncols=4\n(0, 1, 5)\n\n(2, 3, -7)\n(1, 1, 0)\n";
        let m: SparseMatrix = text.parse().unwrap();
        assert_eq!(m.dimensions(), (3, 4));
        assert_eq!(m.nnz(), 2);
        assert_eq!(m.get(0, 1), 5);
        assert_eq!(m.get(2, 3), -7);
        assert!(!m.contains(1, 1));
    }

    #[test]
    fn test_parse_crlf() {
        let m: SparseMatrix = parse_matrix("rows=2\r\ncols=2\r\n(1, 1, 4)\r\n").unwrap();
        assert_eq!(m.get(1, 1), 4);
    }

    #[test]
    fn test_malformed_line_is_not_skipped() {
        let err = parse_matrix::<i64>("rows=2\ncols=2\n(1,2)").unwrap_err();
        assert_eq!(format_line(err), 3);

        let err = parse_matrix::<i64>("rows=2\ncols=2\n(0,0,1)\n\n(1,x,2)").unwrap_err();
        assert_eq!(format_line(err), 5);
    }

    #[test]
    fn test_missing_headers() {
        assert_eq!(format_line(parse_matrix::<i64>("").unwrap_err()), 1);
        assert_eq!(format_line(parse_matrix::<i64>("rows=2").unwrap_err()), 2);
        assert_eq!(format_line(parse_matrix::<i64>("rows=2\ncols=two").unwrap_err()), 2);
    }

    #[test]
    fn test_encode_matrix() {
        let m: SparseMatrix =
            SparseMatrix::from_entries(3, 3, [(2, 0, 9), (0, 2, -1), (0, 0, 4)]);
        assert_eq!(m.to_text(), "rows=3\ncols=3\n(0, 0, 4)\n(0, 2, -1)\n(2, 0, 9)");

        let options = EncodeOptions::default().with_trailing_newline(true);
        let empty: SparseMatrix = SparseMatrix::new(1, 1);
        assert_eq!(encode_matrix(&empty, &options), "rows=1\ncols=1\n");
    }

    #[test]
    fn test_encode_then_parse() {
        let m: SparseMatrix = SparseMatrix::from_entries(
            100,
            50,
            [(99, 49, 1), (0, 0, -2), (10, 5, 300), (10, 4, 7)],
        );
        let back: SparseMatrix = m.to_text().parse().unwrap();
        assert_eq!(back, m);
    }
}
