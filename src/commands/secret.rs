//! Secret acquisition for a new game
//!
//! Builds the answer source the configuration asks for and turns a failed fetch
//! into the configured fallback secret.

use anyhow::{Context, Result};

use crate::config::GameConfig;
use crate::core::{Word, WordError};
use crate::error::FetchError;
use crate::source::{AnswerSource, WordListSource, fetch_secret};
use crate::wordlists::WORDS;
use crate::wordlists::loader::{load_from_file, words_from_slice};

/// Secret chosen for a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acquired {
    pub word: Word,
    /// Why the fallback secret is in use, if it is
    pub fetch_error: Option<FetchError>,
}

impl Acquired {
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.fetch_error.is_some()
    }

    /// Warning to show the player when the fallback secret is in use
    #[must_use]
    pub fn warning(&self) -> Option<String> {
        self.fetch_error
            .as_ref()
            .map(|err| format!("Could not pick a secret word ({err}); using the fallback word"))
    }
}

/// Word source for the configured word list
///
/// # Errors
///
/// Returns an error if a custom word list cannot be read.
pub fn build_source(config: &GameConfig) -> Result<WordListSource> {
    let words = match &config.wordlist {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read word list '{}'", path.display()))?,
        None => words_from_slice(WORDS),
    };

    let source = WordListSource::new(words);
    if source.count_of_length(config.rules.word_length) == 0 {
        eprintln!(
            "Warning: word list has no {}-letter words",
            config.rules.word_length
        );
    }
    Ok(source)
}

/// Fetch a secret with the configured retry policy, falling back to the
/// configured fallback word when every attempt fails
///
/// # Errors
///
/// Returns the validation error if the fallback word itself is unusable.
pub async fn acquire_secret<S: AnswerSource>(
    source: &S,
    config: &GameConfig,
) -> Result<Acquired, WordError> {
    let policy = config.fetch.retry_policy();
    match fetch_secret(source, config.rules.word_length, &policy).await {
        Ok(word) => Ok(Acquired {
            word,
            fetch_error: None,
        }),
        Err(err) => Ok(Acquired {
            word: config.fallback_word()?,
            fetch_error: Some(err),
        }),
    }
}
