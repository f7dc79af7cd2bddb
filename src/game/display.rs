//! Interface the session drives to present the game
//!
//! Front ends (terminal UI, line mode, test doubles) implement [`GameDisplay`].
//! The session never renders anything itself.

use crate::core::LetterState;

/// Visual mark applied to a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMark {
    Verdict(LetterState),
    /// Letter revealed by a hint
    Hint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
    Hint,
}

/// Presentation collaborator of a [`Session`](super::Session)
pub trait GameDisplay {
    /// Current letters of a row, one entry per cell
    fn row_letters(&self, row: usize) -> Vec<Option<char>>;

    fn set_row_enabled(&mut self, row: usize, enabled: bool);

    fn set_cell(&mut self, row: usize, column: usize, letter: Option<char>);

    fn mark_cell(&mut self, row: usize, column: usize, mark: CellMark);

    /// Fill a cell with a known letter and make it non-editable
    fn lock_cell(&mut self, row: usize, column: usize, letter: char, mark: CellMark);

    fn focus_cell(&mut self, row: usize, column: usize);

    fn show_message(&mut self, text: &str, style: MessageStyle);

    fn clear_message(&mut self);

    fn set_submit_enabled(&mut self, enabled: bool);

    fn set_hint_enabled(&mut self, enabled: bool);

    /// Empty every cell, drop all marks and locks, disable every row
    fn clear_board(&mut self);
}
