use serde::{Deserialize, Serialize};

use crate::{Cell, Letter, letter};

/// The vertical word spelled by the intersection letters, with its clue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerticalWord {
    /// The answer word, read top to bottom.
    pub word: String,
    /// Clue shown for the vertical word.
    pub clue: String,
}

/// One horizontal answer word placed on a fixed row.
///
/// The word starts at column `intersection_index`, which is also the column
/// where it crosses the vertical word on that row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HorizontalWord {
    /// The answer word.
    pub word: String,
    /// Clue shown while a cell of this word is selected.
    pub clue: String,
    /// Row index this word occupies.
    pub position: u8,
    /// Starting column, and the column crossing the vertical word.
    pub intersection_index: u8,
}

impl HorizontalWord {
    /// Returns the answer letters, normalized to uppercase.
    #[must_use]
    pub fn letters(&self) -> Vec<Letter> {
        letter::word_letters(&self.word)
    }

    /// Returns the column span occupied by this word.
    #[must_use]
    pub fn span(&self) -> WordSpan {
        #[expect(clippy::cast_possible_truncation)]
        let len = self.word.chars().count() as u8;
        WordSpan {
            start: self.intersection_index,
            len,
        }
    }
}

/// The column range `[start, start + len)` of a horizontal word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan {
    /// First column of the word.
    pub start: u8,
    /// Word length in cells.
    pub len: u8,
}

impl WordSpan {
    /// Last column of the word, or the start column for a zero-length word.
    ///
    /// Saturates at column 255 for spans that extend past it; such spans are
    /// rejected by [`Level::check_consistency`].
    #[must_use]
    #[inline]
    pub fn last(self) -> u8 {
        self.start.saturating_add(self.len.saturating_sub(1))
    }

    /// Returns whether `col` lies inside the span.
    ///
    /// The start column is a member even when the word length is zero.
    #[must_use]
    #[inline]
    pub fn contains(self, col: u8) -> bool {
        let end = u16::from(self.start) + u16::from(self.len);
        (col >= self.start && u16::from(col) < end) || col == self.start
    }

    /// Iterates the columns of the span in order.
    ///
    /// Columns past 255 are clipped.
    pub fn cols(self) -> impl Iterator<Item = u8> {
        let end = u16::from(self.start) + u16::from(self.len);
        (u16::from(self.start)..end).map_while(|col| u8::try_from(col).ok())
    }
}

/// Scoring coefficients for a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Points {
    /// Flat score for solving the level.
    pub base: i64,
    /// Bonus per second remaining on the clock.
    pub time_bonus: i64,
    /// Penalty per hint used.
    pub hint_penalty: i64,
}

/// Level difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Introductory levels.
    Easy,
    /// Mid-pack levels.
    Medium,
    /// Late-game levels.
    Hard,
}

/// An immutable description of one puzzle.
///
/// Produced by an external loader (the serde derives are the shape
/// contract); consumed read-only by the game layer. A constructed level is
/// trusted: [`Level::check_consistency`] is an opt-in check for loaders,
/// never invoked by gameplay code.
///
/// # Example
///
/// ```
/// use wordspine_core::{Cell, Level};
///
/// let level = Level::example();
/// assert_eq!(level.row_count(), 2);
/// assert!(level.contains(Cell::new(0, 0)));
/// assert!(!level.contains(Cell::new(0, 3)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    /// Stable identifier, used by the completed-levels record.
    pub id: String,
    /// Display theme of the puzzle.
    pub theme: String,
    /// Difficulty tier.
    pub difficulty: Difficulty,
    /// The vertical word and its clue.
    pub vertical_word: VerticalWord,
    /// Horizontal words in row order.
    pub horizontal_words: Vec<HorizontalWord>,
    /// Scoring coefficients.
    pub points: Points,
    /// Countdown starting value, in seconds.
    pub time_limit: u32,
}

impl Level {
    /// Number of rows (one per horizontal word).
    #[must_use]
    pub fn row_count(&self) -> u8 {
        #[expect(clippy::cast_possible_truncation)]
        let count = self.horizontal_words.len() as u8;
        count
    }

    /// Grid width: the maximum of `intersection_index + word length` over
    /// all horizontal words, saturating at 255.
    #[must_use]
    pub fn grid_width(&self) -> u8 {
        self.horizontal_words
            .iter()
            .map(|w| {
                let span = w.span();
                span.start.saturating_add(span.len)
            })
            .max()
            .unwrap_or(0)
    }

    /// Looks up the horizontal word on `row` by its `position` field.
    ///
    /// Returns `None` for rows no word claims; callers treat that as a
    /// silent no-op (it only happens with malformed level data).
    #[must_use]
    pub fn word(&self, row: u8) -> Option<&HorizontalWord> {
        self.horizontal_words.iter().find(|w| w.position == row)
    }

    /// Returns the column span of the word on `row`, if any.
    #[must_use]
    pub fn word_span(&self, row: u8) -> Option<WordSpan> {
        self.word(row).map(HorizontalWord::span)
    }

    /// Returns whether `cell` is an active (playable) cell.
    ///
    /// Cells outside every word span are inert: not rendered, not
    /// selectable.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.word_span(cell.row)
            .is_some_and(|span| span.contains(cell.col))
    }

    /// Returns the vertical answer letters, normalized to uppercase.
    #[must_use]
    pub fn vertical_letters(&self) -> Vec<Letter> {
        letter::word_letters(&self.vertical_word.word)
    }

    /// Checks the level-data invariants that gameplay code takes on trust.
    ///
    /// Intended for loaders that want to reject malformed data files up
    /// front. Verifies that row positions are unique and in range, that
    /// every word fits within the addressable columns, that the vertical
    /// word has one letter per row, that every answer is purely alphabetic,
    /// and that each row's first letter matches the vertical word's letter
    /// for that row.
    ///
    /// # Errors
    ///
    /// Returns the first [`LevelError`] found.
    pub fn check_consistency(&self) -> Result<(), LevelError> {
        let rows = self.row_count();
        let mut seen = vec![false; usize::from(rows)];
        for w in &self.horizontal_words {
            if w.position >= rows {
                return Err(LevelError::RowOutOfRange {
                    row: w.position,
                    rows,
                });
            }
            if seen[usize::from(w.position)] {
                return Err(LevelError::DuplicateRow { row: w.position });
            }
            seen[usize::from(w.position)] = true;
            if w.letters().len() != w.word.chars().count() {
                return Err(LevelError::NonAlphabetic {
                    word: w.word.clone(),
                });
            }
            let span = w.span();
            if u16::from(span.start) + u16::from(span.len) > 256 {
                return Err(LevelError::SpanOverflow { row: w.position });
            }
        }

        let vertical = self.vertical_letters();
        if vertical.len() != self.vertical_word.word.chars().count() {
            return Err(LevelError::NonAlphabetic {
                word: self.vertical_word.word.clone(),
            });
        }
        if vertical.len() != usize::from(rows) {
            return Err(LevelError::VerticalLengthMismatch {
                rows,
                vertical_len: vertical.len(),
            });
        }

        for (i, expected) in vertical.iter().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            let row = i as u8;
            // word() cannot fail here: positions are unique and in range.
            let Some(first) = self.word(row).and_then(|w| w.letters().first().copied())
            else {
                continue;
            };
            if first != *expected {
                return Err(LevelError::IntersectionMismatch {
                    row,
                    vertical: expected.to_char(),
                    horizontal: first.to_char(),
                });
            }
        }
        Ok(())
    }

    /// A tiny two-row level used in documentation and tests.
    #[must_use]
    pub fn example() -> Self {
        Self {
            id: "example".into(),
            theme: "animals".into(),
            difficulty: Difficulty::Easy,
            vertical_word: VerticalWord {
                word: "CD".into(),
                clue: "first letters".into(),
            },
            horizontal_words: vec![
                HorizontalWord {
                    word: "CAT".into(),
                    clue: "feline".into(),
                    position: 0,
                    intersection_index: 0,
                },
                HorizontalWord {
                    word: "DOG".into(),
                    clue: "canine".into(),
                    position: 1,
                    intersection_index: 0,
                },
            ],
            points: Points {
                base: 100,
                time_bonus: 2,
                hint_penalty: 10,
            },
            time_limit: 120,
        }
    }
}

/// A violation of the level-data invariants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LevelError {
    /// Two horizontal words claim the same row.
    #[display("two horizontal words share row {row}")]
    DuplicateRow {
        /// The contested row index.
        row: u8,
    },
    /// A word's `position` exceeds the row count.
    #[display("row {row} is out of range for {rows} rows")]
    RowOutOfRange {
        /// The offending row index.
        row: u8,
        /// Number of rows in the level.
        rows: u8,
    },
    /// The vertical word does not have one letter per row.
    #[display("vertical word has {vertical_len} letters but the level has {rows} rows")]
    VerticalLengthMismatch {
        /// Number of rows in the level.
        rows: u8,
        /// Letter count of the vertical word.
        vertical_len: usize,
    },
    /// A row's first letter disagrees with the vertical word.
    #[display("row {row} starts with '{horizontal}' but the vertical word has '{vertical}'")]
    IntersectionMismatch {
        /// The mismatching row.
        row: u8,
        /// Letter the vertical word expects.
        vertical: char,
        /// Letter the horizontal word actually starts with.
        horizontal: char,
    },
    /// An answer contains characters outside `A..=Z`.
    #[display("answer {word:?} contains non-alphabetic characters")]
    NonAlphabetic {
        /// The offending answer word.
        word: String,
    },
    /// A word extends past the last addressable column.
    #[display("row {row}'s word extends past column 255")]
    SpanOverflow {
        /// The offending row index.
        row: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_width_is_max_span_end() {
        let mut level = Level::example();
        assert_eq!(level.grid_width(), 3);
        level.horizontal_words[1].intersection_index = 2;
        assert_eq!(level.grid_width(), 5);
    }

    #[test]
    fn test_word_lookup_by_position() {
        let level = Level::example();
        assert_eq!(level.word(1).map(|w| w.word.as_str()), Some("DOG"));
        assert_eq!(level.word(2).map(|w| w.word.as_str()), None);
    }

    #[test]
    fn test_contains_respects_word_span() {
        let mut level = Level::example();
        level.horizontal_words[1].intersection_index = 1;
        level.horizontal_words[1].word = "OG".into();

        assert!(level.contains(Cell::new(0, 0)));
        assert!(level.contains(Cell::new(0, 2)));
        assert!(!level.contains(Cell::new(0, 3)));
        assert!(!level.contains(Cell::new(1, 0)));
        assert!(level.contains(Cell::new(1, 1)));
        assert!(level.contains(Cell::new(1, 2)));
        assert!(!level.contains(Cell::new(2, 0)));
    }

    #[test]
    fn test_span_contains_start_for_zero_length_word() {
        let span = WordSpan { start: 2, len: 0 };
        assert!(span.contains(2));
        assert!(!span.contains(3));
        assert_eq!(span.cols().count(), 0);
    }

    #[test]
    fn test_span_near_column_limit_does_not_overflow() {
        let span = WordSpan { start: 250, len: 10 };
        assert!(span.contains(252));
        assert!(span.contains(255));
        assert!(!span.contains(249));
        assert_eq!(span.last(), 255);
        assert_eq!(
            span.cols().collect::<Vec<_>>(),
            (250_u8..=255).collect::<Vec<_>>()
        );

        let full = WordSpan { start: 0, len: 255 };
        assert!(full.contains(254));
        assert!(!full.contains(255));
    }

    #[test]
    fn test_grid_width_saturates_at_column_limit() {
        let mut level = Level::example();
        level.horizontal_words[1].intersection_index = 250;
        level.horizontal_words[1].word = "DOGHOUSEFUL".into();
        assert_eq!(level.grid_width(), 255);
    }

    #[test]
    fn test_check_consistency_rejects_span_overflow() {
        let mut level = Level::example();
        level.horizontal_words[1].intersection_index = 250;
        level.horizontal_words[1].word = "DOGHOUSEFUL".into();
        assert_eq!(
            level.check_consistency(),
            Err(LevelError::SpanOverflow { row: 1 })
        );
    }

    #[test]
    fn test_check_consistency_accepts_example() {
        assert_eq!(Level::example().check_consistency(), Ok(()));
    }

    #[test]
    fn test_check_consistency_rejects_duplicate_row() {
        let mut level = Level::example();
        level.horizontal_words[1].position = 0;
        assert_eq!(
            level.check_consistency(),
            Err(LevelError::DuplicateRow { row: 0 })
        );
    }

    #[test]
    fn test_check_consistency_rejects_intersection_mismatch() {
        let mut level = Level::example();
        level.vertical_word.word = "CX".into();
        assert_eq!(
            level.check_consistency(),
            Err(LevelError::IntersectionMismatch {
                row: 1,
                vertical: 'X',
                horizontal: 'D',
            })
        );
    }

    #[test]
    fn test_check_consistency_rejects_short_vertical() {
        let mut level = Level::example();
        level.vertical_word.word = "C".into();
        assert_eq!(
            level.check_consistency(),
            Err(LevelError::VerticalLengthMismatch {
                rows: 2,
                vertical_len: 1,
            })
        );
    }

    #[test]
    fn test_check_consistency_rejects_non_alphabetic() {
        let mut level = Level::example();
        level.horizontal_words[0].word = "C4T".into();
        assert!(matches!(
            level.check_consistency(),
            Err(LevelError::NonAlphabetic { .. })
        ));
    }

    #[test]
    fn test_deserializes_loader_shape() {
        let json = r#"{
            "id": "level1",
            "theme": "animals",
            "difficulty": "easy",
            "verticalWord": { "word": "CD", "clue": "first letters" },
            "horizontalWords": [
                { "word": "CAT", "clue": "feline", "position": 0, "intersectionIndex": 0 },
                { "word": "DOG", "clue": "canine", "position": 1, "intersectionIndex": 0 }
            ],
            "points": { "base": 100, "timeBonus": 2, "hintPenalty": 10 },
            "timeLimit": 120
        }"#;
        let level: Level = serde_json::from_str(json).expect("valid level JSON");
        assert_eq!(level.id, "level1");
        assert_eq!(level.difficulty, Difficulty::Easy);
        assert_eq!(level.time_limit, 120);
        assert_eq!(level.points.time_bonus, 2);
        assert_eq!(level.check_consistency(), Ok(()));
    }
}
