//! Guess evaluation and per-letter feedback
//!
//! Each guess position receives exactly one verdict:
//! - `InPlace`: right letter, right position (green)
//! - `Correct`: letter is in the secret at another, still unmatched position (yellow)
//! - `Wrong`: letter is absent, or every copy of it is already accounted for (gray)

use super::{Guess, Word};
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterState {
    InPlace,
    Correct,
    Wrong,
}

impl LetterState {
    /// Emoji square used in shareable feedback strings
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::InPlace => '🟩',
            Self::Correct => '🟨',
            Self::Wrong => '⬜',
        }
    }

    /// Short lowercase name, matching the cell mark a front end applies
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::InPlace => "inplace",
            Self::Correct => "correct",
            Self::Wrong => "wrong",
        }
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Verdict for one position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterVerdict {
    /// Guessed letter, `None` for a blank cell
    pub letter: Option<char>,
    pub position: usize,
    pub state: LetterState,
}

/// Error returned when secret and guess widths differ
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluateError {
    #[error("guess has {actual} cells but the secret has {expected} letters")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Ordered verdicts for a whole guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    verdicts: Vec<LetterVerdict>,
}

impl Feedback {
    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[LetterVerdict] {
        &self.verdicts
    }

    /// States only, in guess order
    #[must_use]
    pub fn states(&self) -> Vec<LetterState> {
        self.verdicts.iter().map(|v| v.state).collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    /// Check if every position is in place
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.verdicts.is_empty() && self.verdicts.iter().all(|v| v.state == LetterState::InPlace)
    }

    /// Positions whose letter is in place
    pub fn in_place_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.verdicts
            .iter()
            .filter(|v| v.state == LetterState::InPlace)
            .map(|v| v.position)
    }

    /// Count verdicts with the given state
    #[must_use]
    pub fn count(&self, state: LetterState) -> usize {
        self.verdicts.iter().filter(|v| v.state == state).count()
    }

    /// Render as emoji squares, e.g. "⬜🟩🟩🟨🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.verdicts.iter().map(|v| v.state.emoji()).collect()
    }
}

/// Evaluate `guess` against `secret`
///
/// Implements duplicate-aware matching in two passes:
/// 1. Exact position matches become `InPlace` and consume that secret position
/// 2. Remaining letters take the left-most unconsumed secret position holding the
///    same letter (`Correct`), or become `Wrong`. Blank cells are always `Wrong`.
///
/// Resolving exact matches first keeps an earlier displaced copy of a letter from
/// taking the secret position a later copy matches exactly.
///
/// # Errors
/// Returns `EvaluateError::LengthMismatch` if the guess width differs from the secret.
///
/// # Examples
/// ```
/// use wordle_game::core::{evaluate, Guess, LetterState, Word};
///
/// let secret = Word::new("allow", 5).unwrap();
/// let guess = Guess::parse("lolaa").unwrap();
/// let feedback = evaluate(&secret, &guess).unwrap();
///
/// assert_eq!(
///     feedback.states(),
///     [
///         LetterState::Correct,
///         LetterState::Correct,
///         LetterState::InPlace,
///         LetterState::Correct,
///         LetterState::Wrong,
///     ]
/// );
/// ```
pub fn evaluate(secret: &Word, guess: &Guess) -> Result<Feedback, EvaluateError> {
    let answer = secret.letters();
    let cells = guess.cells();

    if cells.len() != answer.len() {
        return Err(EvaluateError::LengthMismatch {
            expected: answer.len(),
            actual: cells.len(),
        });
    }

    let mut states = vec![LetterState::Wrong; cells.len()];
    let mut consumed = vec![false; answer.len()];

    // First pass: exact position matches
    for (i, (&cell, &letter)) in cells.iter().zip(answer).enumerate() {
        if cell == Some(letter) {
            states[i] = LetterState::InPlace;
            consumed[i] = true;
        }
    }

    // Second pass: displaced letters against the remaining pool
    for (i, &cell) in cells.iter().enumerate() {
        if states[i] == LetterState::InPlace {
            continue;
        }
        let Some(letter) = cell else {
            continue;
        };

        if let Some(j) = (0..answer.len()).find(|&j| !consumed[j] && answer[j] == letter) {
            states[i] = LetterState::Correct;
            consumed[j] = true;
        }
    }

    let verdicts = cells
        .iter()
        .zip(states)
        .enumerate()
        .map(|(position, (&cell, state))| LetterVerdict {
            letter: cell.map(char::from),
            position,
            state,
        })
        .collect();

    Ok(Feedback { verdicts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterState::{Correct, InPlace, Wrong};

    fn run(secret: &str, guess: &str) -> Feedback {
        let secret = Word::new(secret, secret.len()).unwrap();
        let guess = Guess::parse(guess).unwrap();
        evaluate(&secret, &guess).unwrap()
    }

    #[test]
    fn all_wrong() {
        let feedback = run("abcde", "fghij");
        assert_eq!(feedback.states(), [Wrong; 5]);
        assert_eq!(feedback.count(Wrong), 5);
        assert!(!feedback.is_win());
    }

    #[test]
    fn all_in_place() {
        let feedback = run("crane", "CRANE");
        assert_eq!(feedback.states(), [InPlace; 5]);
        assert!(feedback.is_win());
        assert_eq!(feedback.to_emoji(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn crane_trace() {
        // A sits at index 2 in both words, so it is matched in the first pass
        let feedback = run("crane", "trace");
        assert_eq!(
            feedback.states(),
            [Wrong, InPlace, InPlace, Correct, InPlace]
        );
        assert_eq!(feedback.in_place_positions().collect::<Vec<_>>(), [1, 2, 4]);
    }

    #[test]
    fn duplicate_letters_allow_lolaa() {
        // Pass 1: L(2) in place. Pass 2: L(0) takes secret[1], O(1) takes secret[3],
        // A(3) takes secret[0], A(4) finds no unconsumed A.
        let feedback = run("allow", "lolaa");
        assert_eq!(
            feedback.states(),
            [Correct, Correct, InPlace, Correct, Wrong]
        );
    }

    #[test]
    fn exact_match_is_not_stolen_by_earlier_copy() {
        // Only one E in the secret, and it is matched exactly at index 4
        let feedback = run("crane", "eerie");
        assert_eq!(feedback.states(), [Wrong, Wrong, Correct, Wrong, InPlace]);
    }

    #[test]
    fn extra_copies_are_wrong_left_most_credited() {
        // Secret has one O; the first displaced O gets credit
        let feedback = run("hello", "ooxxx");
        assert_eq!(feedback.states(), [Correct, Wrong, Wrong, Wrong, Wrong]);
    }

    #[test]
    fn robot_floor() {
        let feedback = run("floor", "robot");
        assert_eq!(feedback.states(), [Correct, Correct, Wrong, InPlace, Wrong]);
    }

    #[test]
    fn blank_cells_are_wrong() {
        let feedback = run("crane", "c_a_e");
        assert_eq!(feedback.states(), [InPlace, Wrong, InPlace, Wrong, InPlace]);
        assert_eq!(feedback.verdicts()[1].letter, None);
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let secret = Word::new("planet", 6).unwrap();
        let guess = Guess::parse("crane").unwrap();
        assert_eq!(
            evaluate(&secret, &guess),
            Err(EvaluateError::LengthMismatch {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn one_verdict_per_position_in_order() {
        for (secret, guess) in [
            ("planet", "banana"),
            ("letter", "settle"),
            ("aaaaaa", "abacab"),
        ] {
            let feedback = run(secret, guess);
            assert_eq!(feedback.len(), secret.len());
            for (i, verdict) in feedback.verdicts().iter().enumerate() {
                assert_eq!(verdict.position, i);
                let expected = guess[i..].chars().next().map(|c| c.to_ascii_uppercase());
                assert_eq!(verdict.letter, expected);
            }
            let total = feedback.count(InPlace) + feedback.count(Correct) + feedback.count(Wrong);
            assert_eq!(total, secret.len());
        }
    }

    #[test]
    fn random_words_credit_each_letter_at_most_once() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        fn random_word(rng: &mut StdRng, len: usize) -> String {
            // Small alphabet so repeated letters are common
            (0..len)
                .map(|_| char::from(rng.random_range(b'A'..=b'D')))
                .collect()
        }

        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..5_000 {
            let len = rng.random_range(1..=7);
            let secret = random_word(&mut rng, len);
            let guess = random_word(&mut rng, len);
            let feedback = run(&secret, &guess);

            assert_eq!(feedback.len(), len);
            for (i, verdict) in feedback.verdicts().iter().enumerate() {
                assert_eq!(verdict.position, i);
                let exact = secret.as_bytes()[i] == guess.as_bytes()[i];
                assert_eq!(verdict.state == InPlace, exact, "{secret} / {guess}");
            }

            for letter in ['A', 'B', 'C', 'D'] {
                let in_secret = secret.chars().filter(|&c| c == letter).count();
                let in_guess = guess.chars().filter(|&c| c == letter).count();
                let credited = feedback
                    .verdicts()
                    .iter()
                    .filter(|v| v.letter == Some(letter) && v.state != Wrong)
                    .count();
                assert_eq!(credited, in_secret.min(in_guess), "{secret} / {guess}");
            }
        }
    }

    #[test]
    fn evaluation_is_idempotent() {
        let secret = Word::new("letter", 6).unwrap();
        let guess = Guess::parse("settle").unwrap();
        assert_eq!(evaluate(&secret, &guess), evaluate(&secret, &guess));
    }
}
