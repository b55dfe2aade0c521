use std::fmt;

use serde::{Deserialize, Serialize};

/// A grid coordinate: row index, then column index.
///
/// Derived `Ord` compares row first, then column, so a `BTreeMap<Cell, _>`
/// iterates in row-major order (keyed by row, then by column).
///
/// # Example
///
/// ```
/// use wordspine_core::Cell;
///
/// let cell = Cell::new(1, 3);
/// assert_eq!(cell.row, 1);
/// assert_eq!(cell.col, 3);
/// assert!(Cell::new(0, 9) < Cell::new(1, 0));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Cell {
    /// Row index (0-based, top to bottom).
    pub row: u8,
    /// Column index (0-based, left to right).
    pub col: u8,
}

impl Cell {
    /// Creates a cell coordinate.
    #[must_use]
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ord_is_row_major() {
        let mut cells = vec![Cell::new(1, 0), Cell::new(0, 5), Cell::new(0, 1)];
        cells.sort();
        assert_eq!(
            cells,
            vec![Cell::new(0, 1), Cell::new(0, 5), Cell::new(1, 0)]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::new(2, 7).to_string(), "(2, 7)");
    }
}
