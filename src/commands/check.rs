//! Evaluate a single guess against a given secret

use crate::core::{Feedback, Guess, Word, evaluate};
use crate::error::GameError;

/// Result of checking one guess
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub secret: Word,
    pub guess: Guess,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `secret`
///
/// The secret sets the word length. Blank cells in the guess may be written as
/// `_`, `.` or a space.
///
/// # Errors
///
/// Returns an error if either word is malformed or their lengths differ.
pub fn check_guess(secret: &str, guess: &str) -> Result<CheckResult, GameError> {
    let secret_text = secret.trim();
    let secret = Word::new(secret_text, secret_text.chars().count())?;
    let guess = Guess::parse(guess.trim())?;
    let feedback = evaluate(&secret, &guess)?;

    Ok(CheckResult {
        secret,
        guess,
        feedback,
    })
}
