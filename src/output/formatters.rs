//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterState};
use crate::game::{Cell, CellMark};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile, e.g. " A " on green
#[must_use]
pub fn letter_tile(letter: Option<char>, mark: Option<CellMark>) -> ColoredString {
    let text = format!(" {} ", letter.unwrap_or('_'));
    match mark {
        Some(CellMark::Verdict(LetterState::InPlace)) => text.black().on_green().bold(),
        Some(CellMark::Verdict(LetterState::Correct)) => text.black().on_yellow().bold(),
        Some(CellMark::Verdict(LetterState::Wrong)) => text.white().on_bright_black(),
        Some(CellMark::Hint) => text.black().on_cyan().bold(),
        None => text.normal(),
    }
}

/// Render a row of board cells as colored tiles
#[must_use]
pub fn row_tiles(cells: &[Cell]) -> String {
    cells
        .iter()
        .map(|cell| letter_tile(cell.letter, cell.mark).to_string())
        .collect()
}

/// Render evaluated feedback as colored tiles
#[must_use]
pub fn feedback_tiles(feedback: &Feedback) -> String {
    feedback
        .verdicts()
        .iter()
        .map(|v| letter_tile(v.letter, Some(CellMark::Verdict(v.state))).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
