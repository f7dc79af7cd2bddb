//! Word and guess representation
//!
//! A [`Word`] is a validated, uppercase sequence of ASCII letters (the secret).
//! A [`Guess`] is one row of player input: fixed-width cells that may still be blank.

use std::fmt;

/// Error type for malformed words and guesses
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,

    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("word must contain only letters A-Z")]
    NonAlphabetic,
}

/// A fixed-length uppercase word
///
/// Equality is case-insensitive by construction: input is uppercased before storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

impl Word {
    /// Create a new Word of exactly `length` letters
    ///
    /// Surrounding whitespace is trimmed and letters are uppercased.
    ///
    /// # Errors
    /// Returns `WordError` if, checked in this order:
    /// - The trimmed text is empty
    /// - Its length is not `length`
    /// - It contains anything but ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("planet", 6).unwrap();
    /// assert_eq!(word.text(), "PLANET");
    ///
    /// assert!(Word::new("crane", 6).is_err());
    /// assert!(Word::new("plan3t", 6).is_err());
    /// ```
    pub fn new(text: impl AsRef<str>, length: usize) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let actual = text.chars().count();
        if actual != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual,
            });
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::NonAlphabetic);
        }

        Ok(Self {
            text: text.to_ascii_uppercase(),
        })
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Get the letter at a specific position
    ///
    /// Returns `None` if `position` is out of range.
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<char> {
        self.letters().get(position).map(|&b| char::from(b))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// One row of player input
///
/// Cells hold uppercase ASCII letters; `None` is a blank cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    cells: Vec<Option<u8>>,
}

impl Guess {
    /// Build a guess from display cells
    ///
    /// # Errors
    /// Returns `WordError::NonAlphabetic` if a populated cell is not an ASCII letter.
    pub fn from_cells(cells: &[Option<char>]) -> Result<Self, WordError> {
        let cells = cells
            .iter()
            .map(|cell| match cell {
                None => Ok(None),
                Some(c) if c.is_ascii_alphabetic() => Ok(Some(c.to_ascii_uppercase() as u8)),
                Some(_) => Err(WordError::NonAlphabetic),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { cells })
    }

    /// Parse a guess from text
    ///
    /// Spaces, `_` and `.` are blank cells; letters are uppercased.
    ///
    /// # Errors
    /// Returns `WordError::NonAlphabetic` on any other character.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Guess;
    ///
    /// let guess = Guess::parse("tr_ce").unwrap();
    /// assert_eq!(guess.len(), 5);
    /// assert!(!guess.is_full(5));
    /// ```
    pub fn parse(text: &str) -> Result<Self, WordError> {
        let cells: Vec<Option<char>> = text
            .chars()
            .map(|c| match c {
                ' ' | '_' | '.' => None,
                c => Some(c),
            })
            .collect();
        Self::from_cells(&cells)
    }

    /// Get the raw cells
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Option<u8>] {
        &self.cells
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of populated cells
    #[must_use]
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Check that the guess has `length` cells and none of them is blank
    #[must_use]
    pub fn is_full(&self, length: usize) -> bool {
        self.cells.len() == length && self.cells.iter().all(Option::is_some)
    }

    /// Check whether this guess spells `word` exactly
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.cells.len() == word.len()
            && self
                .cells
                .iter()
                .zip(word.letters())
                .all(|(cell, &letter)| *cell == Some(letter))
    }
}

impl From<&Word> for Guess {
    fn from(word: &Word) -> Self {
        Self {
            cells: word.letters().iter().copied().map(Some).collect(),
        }
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.map_or('_', char::from))?;
        }
        Ok(())
    }
}
