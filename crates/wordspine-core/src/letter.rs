use std::fmt;

use serde::{Deserialize, Serialize};

/// A single uppercase ASCII letter (`A..=Z`).
///
/// All player input and all answer comparison go through this type, so
/// case-insensitivity is handled once at construction and never again.
///
/// # Example
///
/// ```
/// use wordspine_core::Letter;
///
/// let a = Letter::from_char('a').unwrap();
/// assert_eq!(a.to_char(), 'A');
/// assert_eq!(Letter::from_char('7'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Letter(u8);

impl Letter {
    /// Creates a letter from a character, normalizing to uppercase.
    ///
    /// Returns `None` for anything outside `a..=z` / `A..=Z`.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(c.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    /// Returns the uppercase character for this letter.
    #[must_use]
    #[inline]
    pub fn to_char(self) -> char {
        char::from(self.0)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Letter {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(c)
    }
}

/// Returns the letters of `word` normalized to uppercase.
///
/// Non-alphabetic characters are skipped; level data is expected not to
/// contain any, and [`Level::check_consistency`] reports them when it does.
///
/// [`Level::check_consistency`]: crate::Level::check_consistency
#[must_use]
pub(crate) fn word_letters(word: &str) -> Vec<Letter> {
    word.chars().filter_map(Letter::from_char).collect()
}
