//! Game state and flow
//!
//! The [`AttemptTracker`] is the state machine for one game; the [`Session`]
//! feeds it intents from a front end and reports back through [`GameDisplay`].

mod board;
mod display;
mod hint;
mod rules;
mod session;
mod tracker;

pub use board::{Board, Cell, Message};
pub use display::{CellMark, GameDisplay, MessageStyle};
pub use hint::{HintCounter, HintReveal};
pub use rules::{DEFAULT_MAX_HINTS, DEFAULT_MAX_ROWS, DEFAULT_WORD_LENGTH, GameRules};
pub use session::{Direction, Intent, Outcome, Session};
pub use tracker::{Attempt, AttemptTracker, GameState, PrefilledCell, SubmitOutcome};
