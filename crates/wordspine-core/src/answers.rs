use std::collections::BTreeMap;

use crate::{Cell, Letter};

/// The sparse grid of player-entered letters.
///
/// Keyed by row then column (via [`Cell`]'s row-major ordering); a missing
/// entry means the cell is empty. This is the authoritative record of what
/// the player has typed. The renderer mirrors it, never the other way
/// around.
///
/// # Example
///
/// ```
/// use wordspine_core::{AnswerGrid, Cell, Letter};
///
/// let mut answers = AnswerGrid::new();
/// let cell = Cell::new(0, 0);
/// answers.set(cell, Letter::from_char('c').unwrap());
/// assert_eq!(answers.get(cell).map(Letter::to_char), Some('C'));
///
/// answers.clear(cell);
/// assert_eq!(answers.get(cell), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerGrid {
    letters: BTreeMap<Cell, Letter>,
}

impl AnswerGrid {
    /// Creates an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a letter at `cell`, replacing any previous letter.
    pub fn set(&mut self, cell: Cell, letter: Letter) {
        self.letters.insert(cell, letter);
    }

    /// Removes the letter at `cell`, if any.
    pub fn clear(&mut self, cell: Cell) {
        self.letters.remove(&cell);
    }

    /// Returns the letter at `cell`, if the player has filled it.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<Letter> {
        self.letters.get(&cell).copied()
    }

    /// Returns whether no cell is filled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Removes every letter.
    pub fn reset(&mut self) {
        self.letters.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn test_set_replaces_previous_letter() {
        let mut answers = AnswerGrid::new();
        let cell = Cell::new(1, 2);
        answers.set(cell, letter('a'));
        answers.set(cell, letter('b'));
        assert_eq!(answers.get(cell), Some(letter('B')));
    }

    #[test]
    fn test_clear_missing_cell_is_noop() {
        let mut answers = AnswerGrid::new();
        answers.clear(Cell::new(3, 3));
        assert!(answers.is_empty());
    }

    #[test]
    fn test_reset_empties_grid() {
        let mut answers = AnswerGrid::new();
        answers.set(Cell::new(0, 0), letter('x'));
        answers.set(Cell::new(1, 1), letter('y'));
        answers.reset();
        assert!(answers.is_empty());
        assert_eq!(answers.get(Cell::new(0, 0)), None);
    }
}
