//! Text format constants

/// UTF-8 byte order mark some editors put before the first line
pub const BYTE_ORDER_MARK: char = '\u{feff}';

/// Key on the first line
pub const ROWS_KEY: &str = "rows";

/// Key on the second line
pub const COLS_KEY: &str = "cols";

/// Separator between a header key and its value
pub const HEADER_SEPARATOR: char = '=';

/// Separator between the fields of an entry line
pub const FIELD_SEPARATOR: char = ',';

/// Number of fields in an entry line: row, col, value
pub const ENTRY_FIELD_COUNT: usize = 3;

/// Lines before the first entry line
pub const HEADER_LINES: usize = 2;
