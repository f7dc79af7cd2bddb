//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_tiles, row_tiles};
use crate::core::{Feedback, Guess, LetterState, Word};
use crate::game::{AttemptTracker, Board, GameState, MessageStyle};
use colored::Colorize;

/// Print the result of checking a single guess
pub fn print_check_result(secret: &Word, guess: &Guess, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}   Guess: {}",
        secret.text().bright_yellow().bold(),
        guess.to_string().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}  {}", feedback_tiles(feedback), feedback.to_emoji());
    println!(
        "\n  In place: {}  Correct: {}  Wrong: {}",
        feedback.count(LetterState::InPlace).to_string().green(),
        feedback.count(LetterState::Correct).to_string().yellow(),
        feedback.count(LetterState::Wrong).to_string().bright_black()
    );
}

/// Print every row of the board up to and including the active one
pub fn print_board(board: &Board, tracker: &AttemptTracker) {
    let last = match tracker.state() {
        GameState::AwaitingGuess(row) => row,
        GameState::Won | GameState::Lost => tracker.current_row(),
    };

    println!();
    for row in 0..=last.min(board.row_count().saturating_sub(1)) {
        let marker = if board.is_row_enabled(row) { "▶" } else { " " };
        println!(
            "  {} {}  {}",
            marker.cyan(),
            (row + 1).to_string().bright_black(),
            row_tiles(board.row(row))
        );
    }

    let rules = tracker.rules();
    println!(
        "\n  Attempts [{}] {}/{}   Hints [{}] {}/{}",
        create_progress_bar(tracker.attempts().len(), rules.max_rows, rules.max_rows).cyan(),
        tracker.attempts().len(),
        rules.max_rows,
        create_progress_bar(tracker.hints().used(), rules.max_hints, rules.max_hints).cyan(),
        tracker.hints().used(),
        rules.max_hints
    );

    if let Some(message) = board.message() {
        let text = match message.style {
            MessageStyle::Info => message.text.normal(),
            MessageStyle::Success => message.text.green().bold(),
            MessageStyle::Error => message.text.red(),
            MessageStyle::Hint => message.text.cyan(),
        };
        println!("\n  {text}");
    }
}

/// Print the end-of-game banner with the guess history
pub fn print_game_summary(tracker: &AttemptTracker) {
    let won = tracker.state() == GameState::Won;
    let attempts = tracker.attempts();

    println!("\n{}", "═".repeat(60).bright_cyan());
    if won {
        println!(
            "{}",
            "    🎉  S O L V E D !  🎉    ".bright_green().bold()
        );
        let performance = match attempts.len() {
            1 => "🏆 Hole in one!",
            2 => "⭐ Magnificent!",
            3 => "💫 Splendid!",
            4 => "✨ Great!",
            5 => "👍 Nice!",
            _ => "😅 Phew!",
        };
        println!("\n  {}", performance.bright_yellow().bold());
    } else {
        println!("{}", "    Out of attempts    ".red().bold());
    }
    println!("{}", "═".repeat(60).bright_cyan());

    if let Some(secret) = tracker.secret() {
        println!("\n  The word was {}", secret.text().bright_yellow().bold());
    }

    println!("\n  Guess history:");
    for attempt in attempts {
        println!(
            "    {}. {} {}",
            (attempt.row + 1).to_string().bright_black(),
            attempt.guess.to_string().bright_white().bold(),
            attempt.feedback.to_emoji()
        );
    }
    if tracker.hints().used() > 0 {
        println!("\n  Hints used: {}", tracker.hints().used());
    }
    println!();
}
