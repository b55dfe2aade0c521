use std::fmt;

use wordspine_core::{AnswerGrid, Cell, Level, Letter};

/// Result of validating one word against the answer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum WordStatus {
    /// At least one cell of the word is still empty.
    Incomplete,
    /// Every cell is filled and the word matches the answer.
    Correct,
    /// Every cell is filled but at least one letter is wrong.
    Incorrect,
}

/// Validates player answers against a level.
///
/// Owns the [`AnswerGrid`] plus the per-row correctness cache and the
/// vertical-word flag. Validation recomputes the full word on every call
/// rather than tracking deltas; boards are a few dozen cells at most.
///
/// # Example
///
/// ```
/// use wordspine_core::{Cell, Level, Letter};
/// use wordspine_game::{Validator, WordStatus};
///
/// let level = Level::example();
/// let mut validator = Validator::new(&level);
/// for (col, c) in "cat".chars().enumerate() {
///     let cell = Cell::new(0, col as u8);
///     validator.set_letter(cell, Letter::from_char(c));
/// }
/// assert_eq!(validator.validate_row(&level, 0), WordStatus::Correct);
/// assert!(!validator.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validator {
    answers: AnswerGrid,
    row_correct: Vec<bool>,
    vertical_correct: bool,
}

impl Validator {
    /// Creates a validator sized for `level`, with an empty grid and all
    /// correctness caches false.
    #[must_use]
    pub fn new(level: &Level) -> Self {
        Self {
            answers: AnswerGrid::new(),
            row_correct: vec![false; usize::from(level.row_count())],
            vertical_correct: false,
        }
    }

    /// Read access to the answer grid.
    #[must_use]
    pub fn answers(&self) -> &AnswerGrid {
        &self.answers
    }

    /// Returns the letter at `cell`, if filled.
    #[must_use]
    pub fn letter(&self, cell: Cell) -> Option<Letter> {
        self.answers.get(cell)
    }

    /// Stores or clears a letter. This is the sole mutation entrypoint.
    ///
    /// Typing, erasing, and hint fills all pass through here; callers
    /// re-validate afterwards.
    pub fn set_letter(&mut self, cell: Cell, letter: Option<Letter>) {
        match letter {
            Some(letter) => self.answers.set(cell, letter),
            None => self.answers.clear(cell),
        }
    }

    /// Validates the horizontal word on `row` and updates its cache.
    ///
    /// Incomplete rows report [`WordStatus::Incomplete`] and clear the
    /// cache, so deleting a letter revokes a previously correct row. A row
    /// no word claims also reports incomplete (malformed level data is a
    /// silent no-op).
    pub fn validate_row(&mut self, level: &Level, row: u8) -> WordStatus {
        let Some(word) = level.word(row) else {
            return WordStatus::Incomplete;
        };
        let expected = word.letters();
        let span = word.span();

        let mut typed = Vec::with_capacity(expected.len());
        for col in span.cols() {
            match self.answers.get(Cell::new(row, col)) {
                Some(letter) => typed.push(letter),
                None => {
                    self.set_row_cache(row, false);
                    return WordStatus::Incomplete;
                }
            }
        }

        let correct = typed == expected;
        self.set_row_cache(row, correct);
        if correct {
            WordStatus::Correct
        } else {
            WordStatus::Incorrect
        }
    }

    /// Validates the vertical word and updates its cache.
    ///
    /// Collects the letter at each row's intersection column in row order;
    /// incomplete while any such cell is empty.
    pub fn validate_vertical(&mut self, level: &Level) -> WordStatus {
        let expected = level.vertical_letters();

        let mut typed = Vec::with_capacity(expected.len());
        for word in &level.horizontal_words {
            let cell = Cell::new(word.position, word.intersection_index);
            match self.answers.get(cell) {
                Some(letter) => typed.push(letter),
                None => {
                    self.vertical_correct = false;
                    return WordStatus::Incomplete;
                }
            }
        }

        self.vertical_correct = typed == expected;
        if self.vertical_correct {
            WordStatus::Correct
        } else {
            WordStatus::Incorrect
        }
    }

    /// Cached correctness of `row` from its last validation.
    #[must_use]
    pub fn is_row_correct(&self, row: u8) -> bool {
        self.row_correct.get(usize::from(row)).copied().unwrap_or(false)
    }

    /// Cached correctness of the vertical word.
    #[must_use]
    pub fn is_vertical_correct(&self) -> bool {
        self.vertical_correct
    }

    /// Returns whether every row and the vertical word are correct.
    ///
    /// Purely cache-driven; callers re-validate after each mutation, so the
    /// caches are current whenever this is asked.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.row_correct.is_empty()
            && self.row_correct.iter().all(|&correct| correct)
            && self.vertical_correct
    }

    /// Snapshot of the vertical word's filled letters, one entry per row.
    #[must_use]
    pub fn vertical_progress(&self, level: &Level) -> VerticalProgress {
        let letters = level
            .horizontal_words
            .iter()
            .map(|word| {
                self.answers
                    .get(Cell::new(word.position, word.intersection_index))
            })
            .collect();
        VerticalProgress { letters }
    }

    /// Clears the answer grid and every correctness cache.
    pub fn reset(&mut self) {
        self.answers.reset();
        self.row_correct.fill(false);
        self.vertical_correct = false;
    }

    fn set_row_cache(&mut self, row: u8, correct: bool) {
        if let Some(slot) = self.row_correct.get_mut(usize::from(row)) {
            *slot = correct;
        }
    }
}

/// The vertical word as currently filled, one slot per row.
///
/// Drives the spine display: filled intersection letters render as-is,
/// still-empty rows as a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerticalProgress {
    letters: Vec<Option<Letter>>,
}

impl VerticalProgress {
    /// One entry per row: the intersection letter, or `None` if empty.
    #[must_use]
    pub fn letters(&self) -> &[Option<Letter>] {
        &self.letters
    }

    /// Returns whether every row has its intersection letter filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.letters.iter().all(Option::is_some)
    }
}

impl fmt::Display for VerticalProgress {
    /// Renders filled letters and a space for each empty slot.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            match letter {
                Some(letter) => write!(f, "{letter}")?,
                None => write!(f, " ")?,
            }
        }
        Ok(())
    }
}
