use wordspine_core::{Cell, Level};

/// A directional navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Move to the previous row.
    Up,
    /// Move to the next row.
    Down,
    /// Move one column left within the word.
    Left,
    /// Move one column right within the word.
    Right,
}

/// The currently selected cell and the navigation rules around it.
///
/// At most one cell is selected at a time. Every operation is gated by grid
/// membership: inert cells can never become selected, and all moves are
/// no-ops without a current selection.
///
/// # Example
///
/// ```
/// use wordspine_core::{Cell, Level};
/// use wordspine_game::{Direction, Selection};
///
/// let level = Level::example();
/// let mut selection = Selection::new();
/// selection.select(&level, Cell::new(0, 0));
/// selection.step(&level, Direction::Right);
/// assert_eq!(selection.current(), Some(Cell::new(0, 1)));
///
/// // Clamped at the word boundary: no wraparound.
/// selection.step(&level, Direction::Left);
/// selection.step(&level, Direction::Left);
/// selection.step(&level, Direction::Left);
/// assert_eq!(selection.current(), Some(Cell::new(0, 0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<Cell>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected cell, if any.
    #[must_use]
    pub fn current(&self) -> Option<Cell> {
        self.current
    }

    /// Selects `cell`, replacing any previous selection.
    ///
    /// Returns `false` (and changes nothing) if the cell is inert or out of
    /// range.
    pub fn select(&mut self, level: &Level, cell: Cell) -> bool {
        if !level.contains(cell) {
            return false;
        }
        self.current = Some(cell);
        true
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Advances to the next column after a letter was typed.
    ///
    /// Stays put when the current cell is the last column of its word.
    /// Returns whether the selection moved.
    pub fn advance(&mut self, level: &Level) -> bool {
        let Some(cell) = self.current else {
            return false;
        };
        let Some(span) = level.word_span(cell.row) else {
            return false;
        };
        if cell.col < span.last() {
            self.current = Some(Cell::new(cell.row, cell.col + 1));
            true
        } else {
            false
        }
    }

    /// Moves the selection one step in `direction`.
    ///
    /// Left/Right are clamped to the current row's word span; Up/Down move
    /// to the adjacent row, keeping the column when it lies inside the
    /// target row's span and falling back to the target word's start column
    /// otherwise. Returns whether the selection moved.
    pub fn step(&mut self, level: &Level, direction: Direction) -> bool {
        let Some(cell) = self.current else {
            return false;
        };
        let target = match direction {
            Direction::Right => level.word_span(cell.row).and_then(|span| {
                (cell.col < span.last()).then(|| Cell::new(cell.row, cell.col + 1))
            }),
            Direction::Left => level.word_span(cell.row).and_then(|span| {
                (cell.col > span.start).then(|| Cell::new(cell.row, cell.col - 1))
            }),
            Direction::Down => (cell.row + 1 < level.row_count())
                .then(|| Self::row_target(level, cell, cell.row + 1))
                .flatten(),
            Direction::Up => (cell.row > 0)
                .then(|| Self::row_target(level, cell, cell.row - 1))
                .flatten(),
        };
        match target {
            Some(target) => {
                self.current = Some(target);
                true
            }
            None => false,
        }
    }

    fn row_target(level: &Level, cell: Cell, row: u8) -> Option<Cell> {
        let span = level.word_span(row)?;
        let col = if span.contains(cell.col) {
            cell.col
        } else {
            span.start
        };
        Some(Cell::new(row, col))
    }
}
