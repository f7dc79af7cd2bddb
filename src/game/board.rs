//! In-memory grid of letter cells
//!
//! `Board` is the display state front ends render from: letters, marks, locks,
//! which row accepts input, the focused cell and the current message.

use super::display::{CellMark, GameDisplay, MessageStyle};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<char>,
    pub mark: Option<CellMark>,
    pub locked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub struct Board {
    cells: Vec<Vec<Cell>>,
    enabled: Vec<bool>,
    focus: Option<(usize, usize)>,
    message: Option<Message>,
    submit_enabled: bool,
    hint_enabled: bool,
}

impl Board {
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            cells: vec![vec![Cell::default(); columns]; rows],
            enabled: vec![false; rows],
            focus: None,
            message: None,
            submit_enabled: false,
            hint_enabled: false,
        }
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        self.cells.get(row).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.cells.get(row).and_then(|cells| cells.get(column))
    }

    #[must_use]
    pub fn is_row_enabled(&self, row: usize) -> bool {
        self.enabled.get(row).copied().unwrap_or(false)
    }

    /// First row currently accepting input
    #[must_use]
    pub fn enabled_row(&self) -> Option<usize> {
        self.enabled.iter().position(|&enabled| enabled)
    }

    #[must_use]
    pub const fn focus(&self) -> Option<(usize, usize)> {
        self.focus
    }

    #[must_use]
    pub const fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    #[must_use]
    pub const fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    #[must_use]
    pub const fn hint_enabled(&self) -> bool {
        self.hint_enabled
    }

    /// Row letters as text, `_` for blanks
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        self.row(row)
            .iter()
            .map(|cell| cell.letter.unwrap_or('_'))
            .collect()
    }

    fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut Cell> {
        self.cells.get_mut(row).and_then(|cells| cells.get_mut(column))
    }
}

impl GameDisplay for Board {
    fn row_letters(&self, row: usize) -> Vec<Option<char>> {
        self.row(row).iter().map(|cell| cell.letter).collect()
    }

    fn set_row_enabled(&mut self, row: usize, enabled: bool) {
        if let Some(flag) = self.enabled.get_mut(row) {
            *flag = enabled;
        }
        if !enabled && self.focus.is_some_and(|(focused, _)| focused == row) {
            self.focus = None;
        }
    }

    fn set_cell(&mut self, row: usize, column: usize, letter: Option<char>) {
        if let Some(cell) = self.cell_mut(row, column)
            && !cell.locked
        {
            cell.letter = letter;
        }
    }

    fn mark_cell(&mut self, row: usize, column: usize, mark: CellMark) {
        if let Some(cell) = self.cell_mut(row, column) {
            cell.mark = Some(mark);
        }
    }

    fn lock_cell(&mut self, row: usize, column: usize, letter: char, mark: CellMark) {
        if let Some(cell) = self.cell_mut(row, column) {
            *cell = Cell {
                letter: Some(letter),
                mark: Some(mark),
                locked: true,
            };
        }
    }

    fn focus_cell(&mut self, row: usize, column: usize) {
        if self.cell(row, column).is_some() {
            self.focus = Some((row, column));
        }
    }

    fn show_message(&mut self, text: &str, style: MessageStyle) {
        self.message = Some(Message {
            text: text.to_string(),
            style,
        });
    }

    fn clear_message(&mut self) {
        self.message = None;
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn set_hint_enabled(&mut self, enabled: bool) {
        self.hint_enabled = enabled;
    }

    fn clear_board(&mut self) {
        for row in &mut self.cells {
            row.fill(Cell::default());
        }
        self.enabled.fill(false);
        self.focus = None;
        self.message = None;
        self.submit_enabled = false;
        self.hint_enabled = false;
    }
}
