//! Core domain types for the game
//!
//! This module contains the pure word model and the guess evaluator.
//! Nothing here holds state between calls.

mod feedback;
mod word;

pub use feedback::{EvaluateError, Feedback, LetterState, LetterVerdict, evaluate};
pub use word::{Guess, Word, WordError};
