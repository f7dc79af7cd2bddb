use std::path::PathBuf;
use std::time::Duration;

use crate::core::{EvaluateError, WordError};
use crate::game::GameState;

/// Errors raised by the attempt tracker and the session.
///
/// A failed call never changes game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid word: {0}")]
    Validation(#[from] WordError),

    #[error("row {row} is not full ({filled} of {expected} letters)")]
    RowNotFull {
        row: usize,
        filled: usize,
        expected: usize,
    },

    #[error("no secret word has been set")]
    SecretNotSet,

    #[error("a secret word is already in play")]
    SecretAlreadySet,

    #[error("the game is over ({0:?})")]
    GameOver(GameState),

    #[error("all {max} hints have been used")]
    HintsExhausted { max: usize },

    #[error("every position is already revealed")]
    NoHintAvailable,

    #[error(transparent)]
    Evaluate(#[from] EvaluateError),
}

/// Failure reported by an answer source for a single request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("answer source unavailable: {0}")]
    Unavailable(String),

    #[error("no word of length {0} available")]
    NoWordOfLength(usize),
}

/// Errors from acquiring a secret word under a retry policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("attempt timed out after {0:?}")]
    Timeout(Duration),

    #[error("source returned an unusable word: {0}")]
    Invalid(#[from] WordError),

    #[error("failed to fetch a word after {attempts} attempts: {last}")]
    Exhausted {
        attempts: u32,
        last: Box<FetchError>,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
