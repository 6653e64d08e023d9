//! Cell reference parsing.
//!
//! Converts "A1"-style cell names to numeric coordinates. The anchor code works
//! with 0-based indices, while the public surface reports 1-based ones like
//! spreadsheet applications do.

use crate::ooxml::error::{OoxmlError, Result};
use std::fmt;

/// Largest column index accepted by spreadsheet applications (XFD).
pub const MAX_COLUMNS: u32 = 16_384;
/// Largest row index accepted by spreadsheet applications.
pub const MAX_ROWS: u32 = 1_048_576;

/// Convert column number to column name (A, B, ..., Z, AA, AB, etc.)
///
/// Input is 1-based (1=A, 2=B, 26=Z, 27=AA, etc.)
pub fn column_number_to_name(mut col: u32) -> String {
    if col == 0 {
        return String::new();
    }

    let mut name = String::new();
    while col > 0 {
        col -= 1;
        let ch = (b'A' + (col % 26) as u8) as char;
        name.insert(0, ch);
        col /= 26;
    }
    name
}

/// Convert column name to 1-based column number (A=1, B=2, ..., AA=27).
pub fn column_name_to_number(name: &str) -> Option<u32> {
    if name.is_empty() {
        return None;
    }
    let mut result: u32 = 0;
    for ch in name.chars() {
        let ch = ch.to_ascii_uppercase();
        if !ch.is_ascii_uppercase() {
            return None;
        }
        result = result.checked_mul(26)?.checked_add(ch as u32 - 'A' as u32 + 1)?;
    }
    (result <= MAX_COLUMNS).then_some(result)
}

/// Parse a cell name into 1-based `(column, row)` coordinates.
///
/// # Examples
///
/// ```
/// use xlchart::common::coordinates::cell_name_to_coordinates;
/// assert_eq!(cell_name_to_coordinates("B7").unwrap(), (2, 7));
/// assert_eq!(cell_name_to_coordinates("$AA$10").unwrap(), (27, 10));
/// assert!(cell_name_to_coordinates("7B").is_err());
/// ```
pub fn cell_name_to_coordinates(cell: &str) -> Result<(u32, u32)> {
    let invalid = || OoxmlError::InvalidCellReference(cell.to_string());
    let trimmed: String = cell.chars().filter(|c| *c != '$').collect();

    let split = trimmed
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(invalid)?;
    let (col_str, row_str) = trimmed.split_at(split);

    let col = column_name_to_number(col_str).ok_or_else(invalid)?;
    if !row_str.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let row: u32 = row_str.parse().map_err(|_| invalid())?;
    if row == 0 || row > MAX_ROWS {
        return Err(invalid());
    }
    Ok((col, row))
}

/// A parsed cell reference with 0-based indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    /// Column index (0-based)
    pub col: u32,
    /// Row index (0-based)
    pub row: u32,
}

impl CellRef {
    /// Parse an "A1"-style cell name.
    pub fn parse(cell: &str) -> Result<Self> {
        let (col, row) = cell_name_to_coordinates(cell)?;
        Ok(Self {
            col: col - 1,
            row: row - 1,
        })
    }

    #[inline]
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_number_to_name(self.col + 1), self.row + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_names() {
        assert_eq!(column_number_to_name(1), "A");
        assert_eq!(column_number_to_name(26), "Z");
        assert_eq!(column_number_to_name(27), "AA");
        assert_eq!(column_number_to_name(16_384), "XFD");
        assert_eq!(column_name_to_number("xfd"), Some(16_384));
        assert_eq!(column_name_to_number("XFE"), None);
    }

    #[test]
    fn test_invalid_cells() {
        for cell in ["", "A", "1", "A0", "A1B", "A-1", "XFE1", "A1048577"] {
            assert!(
                matches!(
                    cell_name_to_coordinates(cell),
                    Err(OoxmlError::InvalidCellReference(_))
                ),
                "{cell} should be rejected"
            );
        }
    }

    #[test]
    fn test_cell_ref_is_zero_based() {
        let cell = CellRef::parse("E10").unwrap();
        assert_eq!(cell, CellRef::new(4, 9));
        assert_eq!(cell.to_string(), "E10");
    }
}
