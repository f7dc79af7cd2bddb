//! Intent dispatch between a front end and the attempt tracker
//!
//! Front ends translate raw input (keys, clicks, pasted text) into [`Intent`]s and
//! hand them to [`Session::dispatch`]. The session reads the active row from the
//! display, drives the tracker and pushes the results back to the display.

use super::display::{CellMark, GameDisplay, MessageStyle};
use super::hint::HintReveal;
use super::rules::GameRules;
use super::tracker::{AttemptTracker, GameState, SubmitOutcome};
use crate::core::{Guess, LetterState, Word};
use crate::error::GameError;

/// Focus movement within a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Discrete requests emitted by a front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    CellChanged {
        row: usize,
        column: usize,
        value: Option<char>,
    },
    LettersPasted {
        row: usize,
        column: usize,
        letters: String,
    },
    NavigateRequested {
        row: usize,
        column: usize,
        direction: Direction,
    },
    SubmitRequested,
    HintRequested,
    RestartRequested,
}

/// What a dispatched intent did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Intent did not apply (inactive row, locked cell, edge of row)
    Ignored,
    Edited,
    Moved { column: usize },
    Submitted(SubmitOutcome),
    HintRevealed(HintReveal),
    /// Game was reset; a new secret must be passed to [`Session::begin`]
    SecretRequired,
}

/// Owns the tracker for one player and applies intents to it
#[derive(Debug, Clone, Default)]
pub struct Session {
    tracker: AttemptTracker,
}

impl Session {
    #[must_use]
    pub fn new(rules: GameRules) -> Self {
        Self {
            tracker: AttemptTracker::new(rules),
        }
    }

    #[must_use]
    pub const fn tracker(&self) -> &AttemptTracker {
        &self.tracker
    }

    #[must_use]
    pub const fn rules(&self) -> &GameRules {
        self.tracker.rules()
    }

    /// Row accepting input, `None` once the game is over
    #[must_use]
    pub const fn active_row(&self) -> Option<usize> {
        match self.tracker.state() {
            GameState::AwaitingGuess(row) => Some(row),
            GameState::Won | GameState::Lost => None,
        }
    }

    /// Cells of the active row that are not locked by a confirmed letter
    #[must_use]
    pub fn is_editable(&self, column: usize) -> bool {
        column < self.rules().word_length && !self.tracker.is_position_confirmed(column)
    }

    #[must_use]
    pub fn first_editable(&self) -> Option<usize> {
        (0..self.rules().word_length).find(|&column| self.is_editable(column))
    }

    /// Next editable column from `column` in `direction`, skipping locked cells
    #[must_use]
    pub fn next_editable(&self, column: usize, direction: Direction) -> Option<usize> {
        match direction {
            Direction::Forward => {
                (column + 1..self.rules().word_length).find(|&c| self.is_editable(c))
            }
            Direction::Backward => (0..column.min(self.rules().word_length))
                .rev()
                .find(|&c| self.is_editable(c)),
        }
    }

    /// Start a game with `secret` and open the first row
    ///
    /// # Errors
    /// Returns `GameError::SecretAlreadySet` if a game is in progress, or
    /// `GameError::Validation` if the secret does not fit the rules.
    pub fn begin<D: GameDisplay>(
        &mut self,
        display: &mut D,
        secret: Word,
    ) -> Result<(), GameError> {
        if let Err(err) = self.tracker.set_secret_word(secret) {
            return Err(reject(display, err));
        }

        let row = self.tracker.current_row();
        display.clear_message();
        display.set_row_enabled(row, true);
        display.set_submit_enabled(false);
        display.set_hint_enabled(self.hints_available());
        self.focus_first(display, row);
        Ok(())
    }

    /// Apply one intent
    ///
    /// # Errors
    /// Returns the tracker's error for rejected submissions and hints; the
    /// message is also shown on the display. Game state is unchanged on error.
    pub fn dispatch<D: GameDisplay>(
        &mut self,
        display: &mut D,
        intent: Intent,
    ) -> Result<Outcome, GameError> {
        match intent {
            Intent::CellChanged { row, column, value } => {
                Ok(self.change_cell(display, row, column, value))
            }
            Intent::LettersPasted {
                row,
                column,
                letters,
            } => Ok(self.paste(display, row, column, &letters)),
            Intent::NavigateRequested {
                row,
                column,
                direction,
            } => Ok(self.navigate(display, row, column, direction)),
            Intent::SubmitRequested => self.submit(display),
            Intent::HintRequested => self.hint(display),
            Intent::RestartRequested => {
                self.tracker.reset();
                display.clear_board();
                Ok(Outcome::SecretRequired)
            }
        }
    }

    fn change_cell<D: GameDisplay>(
        &self,
        display: &mut D,
        row: usize,
        column: usize,
        value: Option<char>,
    ) -> Outcome {
        if self.active_row() != Some(row) || !self.is_editable(column) {
            return Outcome::Ignored;
        }

        let letter = value
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase());
        display.set_cell(row, column, letter);

        if letter.is_some()
            && let Some(next) = self.next_editable(column, Direction::Forward)
        {
            display.focus_cell(row, next);
        }

        self.refresh_submit(display, row);
        Outcome::Edited
    }

    fn paste<D: GameDisplay>(
        &self,
        display: &mut D,
        row: usize,
        column: usize,
        letters: &str,
    ) -> Outcome {
        if self.active_row() != Some(row) {
            return Outcome::Ignored;
        }

        let mut letters = letters
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase())
            .peekable();
        if letters.peek().is_none() {
            return Outcome::Ignored;
        }

        let mut last = None;
        for target in (column..self.rules().word_length).filter(|&c| self.is_editable(c)) {
            let Some(letter) = letters.next() else {
                break;
            };
            display.set_cell(row, target, Some(letter));
            last = Some(target);
        }

        if let Some(last) = last {
            let focus = self
                .next_editable(last, Direction::Forward)
                .unwrap_or(last);
            display.focus_cell(row, focus);
        }

        self.refresh_submit(display, row);
        Outcome::Edited
    }

    fn navigate<D: GameDisplay>(
        &self,
        display: &mut D,
        row: usize,
        column: usize,
        direction: Direction,
    ) -> Outcome {
        if self.active_row() != Some(row) {
            return Outcome::Ignored;
        }
        match self.next_editable(column, direction) {
            Some(column) => {
                display.focus_cell(row, column);
                Outcome::Moved { column }
            }
            None => Outcome::Ignored,
        }
    }

    fn submit<D: GameDisplay>(&mut self, display: &mut D) -> Result<Outcome, GameError> {
        let row = self.tracker.current_row();
        let guess = Guess::from_cells(&display.row_letters(row))
            .map_err(GameError::from)
            .and_then(|guess| self.tracker.submit_guess(&guess));

        let outcome = match guess {
            Ok(outcome) => outcome,
            Err(err) => return Err(reject(display, err)),
        };

        for verdict in outcome.feedback.verdicts() {
            display.mark_cell(row, verdict.position, CellMark::Verdict(verdict.state));
        }
        display.set_row_enabled(row, false);
        display.set_submit_enabled(false);

        match outcome.state {
            GameState::Won | GameState::Lost => {
                let answer = self
                    .tracker
                    .secret()
                    .map(|word| word.text().to_lowercase())
                    .unwrap_or_default();
                let (text, style) = if outcome.state == GameState::Won {
                    (format!("You Won! The word was {answer}"), MessageStyle::Success)
                } else {
                    (format!("You Lost! The word was {answer}"), MessageStyle::Error)
                };
                display.show_message(&text, style);
                display.set_hint_enabled(false);
            }
            GameState::AwaitingGuess(next) => {
                display.clear_message();
                display.set_row_enabled(next, true);
                for cell in &outcome.prefilled {
                    display.lock_cell(
                        next,
                        cell.position,
                        cell.letter,
                        CellMark::Verdict(LetterState::InPlace),
                    );
                }
                display.set_hint_enabled(self.hints_available());
                self.focus_first(display, next);
            }
        }

        Ok(Outcome::Submitted(outcome))
    }

    fn hint<D: GameDisplay>(&mut self, display: &mut D) -> Result<Outcome, GameError> {
        let row = self.tracker.current_row();
        let hint = match self.tracker.reveal_hint() {
            Ok(hint) => hint,
            Err(err) => {
                display.set_hint_enabled(false);
                return Err(reject(display, err));
            }
        };

        display.lock_cell(row, hint.position, hint.letter, CellMark::Hint);
        display.show_message(
            &format!(
                "Hint: letter {} is {} ({} left)",
                hint.position + 1,
                hint.letter,
                hint.hints_remaining
            ),
            MessageStyle::Hint,
        );
        display.set_hint_enabled(self.hints_available());
        self.focus_first(display, row);
        self.refresh_submit(display, row);

        Ok(Outcome::HintRevealed(hint))
    }

    fn hints_available(&self) -> bool {
        !self.tracker.hints().is_exhausted() && self.tracker.next_hint_position().is_some()
    }

    fn focus_first<D: GameDisplay>(&self, display: &mut D, row: usize) {
        if let Some(column) = self.first_editable() {
            display.focus_cell(row, column);
        }
    }

    fn refresh_submit<D: GameDisplay>(&self, display: &mut D, row: usize) {
        let full = display.row_letters(row).iter().all(Option::is_some);
        display.set_submit_enabled(full);
    }
}

fn reject<D: GameDisplay>(display: &mut D, err: GameError) -> GameError {
    display.show_message(&err.to_string(), MessageStyle::Error);
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Board;

    fn start(secret: &str) -> (Session, Board) {
        let rules = GameRules::new(5, 6, 3);
        let mut session = Session::new(rules);
        let mut board = Board::new(rules.max_rows, rules.word_length);
        session
            .begin(&mut board, Word::new(secret, 5).unwrap())
            .unwrap();
        (session, board)
    }

    fn type_row(session: &mut Session, board: &mut Board, text: &str) {
        let row = session.active_row().unwrap();
        session
            .dispatch(
                board,
                Intent::LettersPasted {
                    row,
                    column: 0,
                    letters: text.to_string(),
                },
            )
            .unwrap();
    }

    fn submit(session: &mut Session, board: &mut Board) -> Result<Outcome, GameError> {
        session.dispatch(board, Intent::SubmitRequested)
    }

    #[test]
    fn begin_opens_first_row() {
        let (session, board) = start("crane");
        assert_eq!(session.active_row(), Some(0));
        assert_eq!(board.enabled_row(), Some(0));
        assert_eq!(board.focus(), Some((0, 0)));
        assert!(!board.submit_enabled());
        assert!(board.hint_enabled());
    }

    #[test]
    fn begin_twice_is_rejected() {
        let (mut session, mut board) = start("crane");
        let err = session
            .begin(&mut board, Word::new("slate", 5).unwrap())
            .unwrap_err();
        assert_eq!(err, GameError::SecretAlreadySet);
        assert_eq!(board.message().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn typing_uppercases_and_advances_focus() {
        let (mut session, mut board) = start("crane");
        let outcome = session
            .dispatch(
                &mut board,
                Intent::CellChanged {
                    row: 0,
                    column: 0,
                    value: Some('t'),
                },
            )
            .unwrap();
        assert_eq!(outcome, Outcome::Edited);
        assert_eq!(board.row_text(0), "T____");
        assert_eq!(board.focus(), Some((0, 1)));
        assert!(!board.submit_enabled());
    }

    #[test]
    fn non_letters_clear_the_cell() {
        let (mut session, mut board) = start("crane");
        type_row(&mut session, &mut board, "t");
        session
            .dispatch(
                &mut board,
                Intent::CellChanged {
                    row: 0,
                    column: 0,
                    value: Some('7'),
                },
            )
            .unwrap();
        assert_eq!(board.row_text(0), "_____");
    }

    #[test]
    fn edits_to_inactive_rows_are_ignored() {
        let (mut session, mut board) = start("crane");
        let outcome = session
            .dispatch(
                &mut board,
                Intent::CellChanged {
                    row: 3,
                    column: 0,
                    value: Some('a'),
                },
            )
            .unwrap();
        assert_eq!(outcome, Outcome::Ignored);
        assert_eq!(board.row_text(3), "_____");
    }

    #[test]
    fn full_row_enables_submit() {
        let (mut session, mut board) = start("crane");
        type_row(&mut session, &mut board, "trace");
        assert!(board.submit_enabled());
        assert_eq!(board.focus(), Some((0, 4)));
    }

    #[test]
    fn submit_incomplete_row_is_rejected() {
        let (mut session, mut board) = start("crane");
        type_row(&mut session, &mut board, "tra");

        let err = submit(&mut session, &mut board).unwrap_err();
        assert!(matches!(err, GameError::RowNotFull { row: 0, filled: 3, .. }));
        assert_eq!(session.active_row(), Some(0));
        assert!(board.is_row_enabled(0));
        assert_eq!(board.message().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn submit_marks_row_and_carries_letters_forward() {
        let (mut session, mut board) = start("crane");
        type_row(&mut session, &mut board, "trace");

        let Outcome::Submitted(outcome) = submit(&mut session, &mut board).unwrap() else {
            panic!("expected a submission");
        };
        assert_eq!(outcome.state, GameState::AwaitingGuess(1));

        let marks: Vec<_> = board.row(0).iter().map(|cell| cell.mark).collect();
        assert_eq!(
            marks,
            [
                Some(CellMark::Verdict(LetterState::Wrong)),
                Some(CellMark::Verdict(LetterState::InPlace)),
                Some(CellMark::Verdict(LetterState::InPlace)),
                Some(CellMark::Verdict(LetterState::Correct)),
                Some(CellMark::Verdict(LetterState::InPlace)),
            ]
        );
        assert!(!board.is_row_enabled(0));
        assert!(board.is_row_enabled(1));
        assert_eq!(board.row_text(1), "_RA_E");
        assert!(board.cell(1, 1).unwrap().locked);
        assert!(!board.cell(1, 0).unwrap().locked);
        assert_eq!(board.focus(), Some((1, 0)));
    }

    #[test]
    fn navigation_and_paste_skip_locked_cells() {
        let (mut session, mut board) = start("crane");
        type_row(&mut session, &mut board, "trace");
        submit(&mut session, &mut board).unwrap();

        let outcome = session
            .dispatch(
                &mut board,
                Intent::NavigateRequested {
                    row: 1,
                    column: 0,
                    direction: Direction::Forward,
                },
            )
            .unwrap();
        assert_eq!(outcome, Outcome::Moved { column: 3 });

        let outcome = session
            .dispatch(
                &mut board,
                Intent::NavigateRequested {
                    row: 1,
                    column: 0,
                    direction: Direction::Backward,
                },
            )
            .unwrap();
        assert_eq!(outcome, Outcome::Ignored);

        type_row(&mut session, &mut board, "cn");
        assert_eq!(board.row_text(1), "CRANE");
        assert!(board.submit_enabled());
    }

    #[test]
    fn winning_shows_message_and_locks_controls() {
        let (mut session, mut board) = start("crane");
        type_row(&mut session, &mut board, "crane");
        submit(&mut session, &mut board).unwrap();

        assert_eq!(session.active_row(), None);
        let message = board.message().unwrap();
        assert_eq!(message.text, "You Won! The word was crane");
        assert_eq!(message.style, MessageStyle::Success);
        assert!(!board.submit_enabled());
        assert!(!board.hint_enabled());
        assert_eq!(board.enabled_row(), None);
    }

    #[test]
    fn losing_after_every_row() {
        let (mut session, mut board) = start("crane");
        for _ in 0..6 {
            let row = session.active_row().unwrap();
            let editable: Vec<usize> = (0..5).filter(|&c| session.is_editable(c)).collect();
            for column in editable {
                session
                    .dispatch(
                        &mut board,
                        Intent::CellChanged {
                            row,
                            column,
                            value: Some('z'),
                        },
                    )
                    .unwrap();
            }
            submit(&mut session, &mut board).unwrap();
        }

        assert_eq!(session.tracker().state(), GameState::Lost);
        assert_eq!(
            board.message().unwrap().text,
            "You Lost! The word was crane"
        );
        assert!(matches!(
            submit(&mut session, &mut board),
            Err(GameError::GameOver(GameState::Lost))
        ));
    }

    #[test]
    fn hint_locks_cell_in_active_row() {
        let (mut session, mut board) = start("crane");
        let Outcome::HintRevealed(hint) =
            session.dispatch(&mut board, Intent::HintRequested).unwrap()
        else {
            panic!("expected a hint");
        };

        assert_eq!(hint.position, 0);
        let cell = board.cell(0, 0).unwrap();
        assert_eq!(cell.letter, Some('C'));
        assert_eq!(cell.mark, Some(CellMark::Hint));
        assert!(cell.locked);
        assert_eq!(board.focus(), Some((0, 1)));
        assert_eq!(board.message().unwrap().style, MessageStyle::Hint);
    }

    #[test]
    fn hint_control_disabled_when_exhausted() {
        let (mut session, mut board) = start("crane");
        for _ in 0..3 {
            session.dispatch(&mut board, Intent::HintRequested).unwrap();
        }
        assert!(!board.hint_enabled());
        assert_eq!(board.row_text(0), "CRA__");

        let err = session
            .dispatch(&mut board, Intent::HintRequested)
            .unwrap_err();
        assert_eq!(err, GameError::HintsExhausted { max: 3 });
        assert_eq!(session.tracker().hints().used(), 3);
    }

    #[test]
    fn restart_clears_board_and_requires_secret() {
        let (mut session, mut board) = start("crane");
        type_row(&mut session, &mut board, "trace");
        submit(&mut session, &mut board).unwrap();

        let outcome = session
            .dispatch(&mut board, Intent::RestartRequested)
            .unwrap();
        assert_eq!(outcome, Outcome::SecretRequired);
        assert_eq!(board.enabled_row(), None);
        assert_eq!(board.row_text(0), "_____");
        assert!(session.tracker().secret().is_none());
        assert!(matches!(
            submit(&mut session, &mut board),
            Err(GameError::RowNotFull { .. })
        ));

        session
            .begin(&mut board, Word::new("slate", 5).unwrap())
            .unwrap();
        assert_eq!(board.enabled_row(), Some(0));
        assert_eq!(session.tracker().secret().unwrap().text(), "SLATE");
    }
}
