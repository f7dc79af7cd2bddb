//! Row-progression state machine
//!
//! The tracker owns everything that changes during one game: the secret, the
//! active row, positions proven correct so far, hints used and the attempt history.
//! Every rejected call leaves all of it untouched.

use std::collections::BTreeSet;

use super::hint::{HintCounter, HintReveal};
use super::rules::GameRules;
use crate::core::{Feedback, Guess, Word, WordError, evaluate};
use crate::error::GameError;

/// Game lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Waiting for a guess on the given row
    AwaitingGuess(usize),
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A cell shown as already solved and locked in a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefilledCell {
    pub position: usize,
    pub letter: char,
}

/// A submitted guess with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub row: usize,
    pub guess: Guess,
    pub feedback: Feedback,
}

/// Result of a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Row the guess was played on
    pub row: usize,
    pub feedback: Feedback,
    /// Positions that became confirmed with this guess
    pub newly_confirmed: Vec<usize>,
    pub state: GameState,
    /// Locked cells for the next row; empty once the game is over
    pub prefilled: Vec<PrefilledCell>,
}

/// Owns the state of a single game
#[derive(Debug, Clone)]
pub struct AttemptTracker {
    rules: GameRules,
    secret: Option<Word>,
    state: GameState,
    row: usize,
    confirmed: BTreeSet<usize>,
    hints: HintCounter,
    attempts: Vec<Attempt>,
}

impl AttemptTracker {
    /// Create a tracker waiting for its secret
    ///
    /// Rules without a single row start out `Lost`: no guess can ever be played.
    #[must_use]
    pub fn new(rules: GameRules) -> Self {
        Self {
            rules,
            secret: None,
            state: initial_state(&rules),
            row: 0,
            confirmed: BTreeSet::new(),
            hints: HintCounter::new(rules.max_hints),
            attempts: Vec::new(),
        }
    }

    /// Create a tracker with its secret already in place
    ///
    /// # Errors
    /// Returns `GameError::Validation` if `secret` does not fit the rules.
    pub fn with_secret(rules: GameRules, secret: &str) -> Result<Self, GameError> {
        let mut tracker = Self::new(rules);
        tracker.set_secret(secret)?;
        Ok(tracker)
    }

    /// Install the secret for this game
    ///
    /// # Errors
    /// - `GameError::SecretAlreadySet` if a secret is in play (call `reset` first)
    /// - `GameError::Validation` if the word is empty, the wrong length or not alphabetic
    pub fn set_secret(&mut self, secret: &str) -> Result<(), GameError> {
        if self.secret.is_some() {
            return Err(GameError::SecretAlreadySet);
        }
        let word = Word::new(secret, self.rules.word_length)?;
        self.secret = Some(word);
        Ok(())
    }

    /// Install an already validated secret
    ///
    /// # Errors
    /// Same conditions as [`set_secret`](Self::set_secret).
    pub fn set_secret_word(&mut self, secret: Word) -> Result<(), GameError> {
        if self.secret.is_some() {
            return Err(GameError::SecretAlreadySet);
        }
        if secret.len() != self.rules.word_length {
            return Err(WordError::InvalidLength {
                expected: self.rules.word_length,
                actual: secret.len(),
            }
            .into());
        }
        self.secret = Some(secret);
        Ok(())
    }

    /// Evaluate a guess on the active row and advance the game
    ///
    /// # Errors
    /// - `GameError::GameOver` once the game is won or lost
    /// - `GameError::RowNotFull` if the guess is the wrong width or has blank cells
    /// - `GameError::SecretNotSet` if no secret has been installed
    pub fn submit_guess(&mut self, guess: &Guess) -> Result<SubmitOutcome, GameError> {
        let row = self.active_row()?;
        let length = self.rules.word_length;

        if !guess.is_full(length) {
            return Err(GameError::RowNotFull {
                row,
                filled: guess.filled(),
                expected: length,
            });
        }

        let secret = self.secret.as_ref().ok_or(GameError::SecretNotSet)?;
        let feedback = evaluate(secret, guess)?;
        let won = guess.matches(secret);

        let newly_confirmed: Vec<usize> = feedback
            .in_place_positions()
            .filter(|&position| self.confirmed.insert(position))
            .collect();

        self.state = if won {
            GameState::Won
        } else if row >= self.rules.last_row() {
            GameState::Lost
        } else {
            self.row = row + 1;
            GameState::AwaitingGuess(self.row)
        };

        self.attempts.push(Attempt {
            row,
            guess: guess.clone(),
            feedback: feedback.clone(),
        });

        let prefilled = if self.state.is_terminal() {
            Vec::new()
        } else {
            self.prefilled_cells()
        };

        Ok(SubmitOutcome {
            row,
            feedback,
            newly_confirmed,
            state: self.state,
            prefilled,
        })
    }

    /// Left-most position not yet confirmed, `None` if every position is known
    #[must_use]
    pub fn next_hint_position(&self) -> Option<usize> {
        (0..self.rules.word_length).find(|position| !self.confirmed.contains(position))
    }

    /// Reveal the next unknown position as if it had been found by play
    ///
    /// # Errors
    /// - `GameError::GameOver` once the game is won or lost
    /// - `GameError::SecretNotSet` if no secret has been installed
    /// - `GameError::HintsExhausted` when the hint budget is spent
    /// - `GameError::NoHintAvailable` when every position is already confirmed
    pub fn reveal_hint(&mut self) -> Result<HintReveal, GameError> {
        self.active_row()?;
        let secret = self.secret.as_ref().ok_or(GameError::SecretNotSet)?;

        if self.hints.is_exhausted() {
            return Err(GameError::HintsExhausted {
                max: self.hints.max(),
            });
        }

        let position = self.next_hint_position().ok_or(GameError::NoHintAvailable)?;
        let letter = secret
            .letter_at(position)
            .ok_or(GameError::NoHintAvailable)?;

        self.hints.take();
        self.confirmed.insert(position);

        Ok(HintReveal {
            position,
            letter,
            hints_used: self.hints.used(),
            hints_remaining: self.hints.remaining(),
        })
    }

    /// Start over: no secret, row 0, nothing confirmed, full hint budget
    pub fn reset(&mut self) {
        self.secret = None;
        self.state = initial_state(&self.rules);
        self.row = 0;
        self.confirmed.clear();
        self.hints.reset();
        self.attempts.clear();
    }

    /// Confirmed positions paired with the secret's letters, in position order
    #[must_use]
    pub fn prefilled_cells(&self) -> Vec<PrefilledCell> {
        let Some(secret) = &self.secret else {
            return Vec::new();
        };
        self.confirmed
            .iter()
            .filter_map(|&position| {
                secret
                    .letter_at(position)
                    .map(|letter| PrefilledCell { position, letter })
            })
            .collect()
    }

    fn active_row(&self) -> Result<usize, GameError> {
        match self.state {
            GameState::AwaitingGuess(row) => Ok(row),
            state => Err(GameError::GameOver(state)),
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Index of the active row, or of the last played row once the game is over
    #[inline]
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn rules(&self) -> &GameRules {
        &self.rules
    }

    #[inline]
    #[must_use]
    pub fn secret(&self) -> Option<&Word> {
        self.secret.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn confirmed_positions(&self) -> &BTreeSet<usize> {
        &self.confirmed
    }

    #[inline]
    #[must_use]
    pub fn is_position_confirmed(&self, position: usize) -> bool {
        self.confirmed.contains(&position)
    }

    /// Number of confirmed positions
    #[inline]
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.confirmed.len()
    }

    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[inline]
    #[must_use]
    pub const fn hints(&self) -> &HintCounter {
        &self.hints
    }
}

const fn initial_state(rules: &GameRules) -> GameState {
    if rules.max_rows == 0 {
        GameState::Lost
    } else {
        GameState::AwaitingGuess(0)
    }
}

impl Default for AttemptTracker {
    fn default() -> Self {
        Self::new(GameRules::default())
    }
}
