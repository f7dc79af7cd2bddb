//! Fixed parameters of one game

/// Default secret length
pub const DEFAULT_WORD_LENGTH: usize = 6;

/// Default number of attempts
pub const DEFAULT_MAX_ROWS: usize = 6;

/// Default number of hints per game
pub const DEFAULT_MAX_HINTS: usize = 3;

/// Game rules (immutable for the lifetime of a tracker)
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameRules {
    pub word_length: usize,
    pub max_rows: usize,
    pub max_hints: usize,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_rows: DEFAULT_MAX_ROWS,
            max_hints: DEFAULT_MAX_HINTS,
        }
    }
}

impl GameRules {
    /// Rules for a game of `max_rows` guesses at `word_length` letters
    ///
    /// Nothing is validated here. A tracker built with `max_rows == 0` starts
    /// out lost, and no secret fits `word_length == 0`.
    #[must_use]
    pub const fn new(word_length: usize, max_rows: usize, max_hints: usize) -> Self {
        Self {
            word_length,
            max_rows,
            max_hints,
        }
    }

    /// Index of the final attempt
    #[must_use]
    pub const fn last_row(&self) -> usize {
        self.max_rows.saturating_sub(1)
    }
}
