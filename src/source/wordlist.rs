//! Word-list backed answer sources

use std::sync::Mutex;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use super::AnswerSource;
use crate::core::Word;
use crate::error::SourceError;

/// Picks a random word of the requested length from a list
pub struct WordListSource {
    words: Vec<Word>,
    rng: Mutex<StdRng>,
}

impl WordListSource {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            words,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Deterministic picks, for tests and reproducible games
    #[must_use]
    pub fn with_seed(words: Vec<Word>, seed: u64) -> Self {
        Self {
            words,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of words with exactly `length` letters
    #[must_use]
    pub fn count_of_length(&self, length: usize) -> usize {
        self.words.iter().filter(|w| w.len() == length).count()
    }

    fn pick(&self, length: usize) -> Result<String, SourceError> {
        let candidates: Vec<&Word> = self.words.iter().filter(|w| w.len() == length).collect();

        let mut rng = self
            .rng
            .lock()
            .map_err(|_| SourceError::Unavailable("random generator poisoned".to_string()))?;

        candidates
            .choose(&mut *rng)
            .map(|word| word.text().to_string())
            .ok_or(SourceError::NoWordOfLength(length))
    }
}

impl AnswerSource for WordListSource {
    async fn fetch(&self, length: usize) -> Result<String, SourceError> {
        self.pick(length)
    }
}

/// Always answers with the same word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSource {
    word: String,
}

impl FixedSource {
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into() }
    }
}

impl AnswerSource for FixedSource {
    async fn fetch(&self, _length: usize) -> Result<String, SourceError> {
        Ok(self.word.clone())
    }
}
