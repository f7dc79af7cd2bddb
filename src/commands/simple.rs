//! Simple interactive CLI mode
//!
//! Line-based game without TUI: each line is a guess or a command.

use crate::commands::secret::acquire_secret;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::{Board, GameDisplay, Intent, Outcome, Session};
use crate::output::{print_board, print_game_summary};
use crate::source::AnswerSource;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use tokio::runtime::Runtime;

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Quit,
    NewGame,
    Hint,
    Help,
    Guess(String),
}

impl LineCommand {
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.to_ascii_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" | "restart" => Self::NewGame,
            "hint" | "h" | "?" => Self::Hint,
            "help" => Self::Help,
            _ => Self::Guess(input.to_string()),
        }
    }
}

/// Type a line into the active row and submit it
///
/// A line with exactly one letter per cell is laid over the whole row, so
/// locked cells keep their letters. Shorter lines fill the editable cells from
/// the left.
///
/// # Errors
///
/// Returns the rejection from the session, which is also shown on the display.
pub fn play_line<D: GameDisplay>(
    session: &mut Session,
    display: &mut D,
    text: &str,
) -> Result<Outcome, GameError> {
    let Some(row) = session.active_row() else {
        return session.dispatch(display, Intent::SubmitRequested);
    };
    let length = session.rules().word_length;

    let editable: Vec<usize> = (0..length).filter(|&c| session.is_editable(c)).collect();
    for column in editable {
        session.dispatch(
            display,
            Intent::CellChanged {
                row,
                column,
                value: None,
            },
        )?;
    }

    let letters: Vec<char> = text.chars().filter(char::is_ascii_alphabetic).collect();
    if letters.len() == length {
        for (column, letter) in letters.into_iter().enumerate() {
            session.dispatch(
                display,
                Intent::CellChanged {
                    row,
                    column,
                    value: Some(letter),
                },
            )?;
        }
    } else {
        session.dispatch(
            display,
            Intent::LettersPasted {
                row,
                column: 0,
                letters: text.to_string(),
            },
        )?;
    }

    session.dispatch(display, Intent::SubmitRequested)
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error on I/O failure or if no usable secret can be chosen.
pub fn run_simple<S: AnswerSource>(
    config: &GameConfig,
    source: &S,
    runtime: &Runtime,
) -> Result<()> {
    let rules = config.rules;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Wordle - Line Mode                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Guess the {}-letter word in {} tries. You have {} hints.",
        rules.word_length, rules.max_rows, rules.max_hints
    );
    print_help();

    let mut session = Session::new(rules);
    let mut board = Board::new(rules.max_rows, rules.word_length);
    start_game(&mut session, &mut board, source, config, runtime)?;

    loop {
        print_board(&board, session.tracker());

        if session.tracker().state().is_terminal() {
            print_game_summary(session.tracker());
            match get_user_input("Play again? (yes/no)")?.as_deref() {
                Some("yes" | "y") => {
                    session.dispatch(&mut board, Intent::RestartRequested)?;
                    start_game(&mut session, &mut board, source, config, runtime)?;
                    println!("\n🔄 New game started!");
                    continue;
                }
                _ => break,
            }
        }

        let Some(input) = get_user_input("Guess")? else {
            break;
        };

        // Rejections land on the board and are printed with it
        match LineCommand::parse(&input) {
            LineCommand::Quit => break,
            LineCommand::NewGame => {
                session.dispatch(&mut board, Intent::RestartRequested)?;
                start_game(&mut session, &mut board, source, config, runtime)?;
                println!("\n🔄 New game started!");
            }
            LineCommand::Hint => {
                session.dispatch(&mut board, Intent::HintRequested).ok();
            }
            LineCommand::Help => print_help(),
            LineCommand::Guess(text) => {
                play_line(&mut session, &mut board, &text).ok();
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn start_game<S: AnswerSource>(
    session: &mut Session,
    board: &mut Board,
    source: &S,
    config: &GameConfig,
    runtime: &Runtime,
) -> Result<()> {
    let acquired = runtime.block_on(acquire_secret(source, config))?;
    if let Some(warning) = acquired.warning() {
        eprintln!("{} {warning}", "Warning:".yellow().bold());
    }
    session.begin(board, acquired.word)?;
    Ok(())
}

fn print_help() {
    println!("\nType a word and press Enter. Letters locked in green carry over.");
    println!("Commands: 'hint' reveals a letter, 'new' starts over, 'quit' exits\n");
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{GameRules, GameState, MessageStyle};

    fn start(secret: &str) -> (Session, Board) {
        let rules = GameRules::new(5, 6, 3);
        let mut session = Session::new(rules);
        let mut board = Board::new(rules.max_rows, rules.word_length);
        session
            .begin(&mut board, Word::new(secret, 5).unwrap())
            .unwrap();
        (session, board)
    }

    #[test]
    fn parse_commands() {
        assert_eq!(LineCommand::parse(" Q "), LineCommand::Quit);
        assert_eq!(LineCommand::parse("new"), LineCommand::NewGame);
        assert_eq!(LineCommand::parse("HINT"), LineCommand::Hint);
        assert_eq!(LineCommand::parse("help"), LineCommand::Help);
        assert_eq!(
            LineCommand::parse("crane"),
            LineCommand::Guess("crane".to_string())
        );
    }

    #[test]
    fn full_line_is_submitted() {
        let (mut session, mut board) = start("crane");
        let Outcome::Submitted(outcome) = play_line(&mut session, &mut board, "trace").unwrap()
        else {
            panic!("expected a submission");
        };
        assert_eq!(outcome.state, GameState::AwaitingGuess(1));
        assert_eq!(board.row_text(1), "_RA_E");
    }

    #[test]
    fn full_line_keeps_locked_letters() {
        let (mut session, mut board) = start("crane");
        play_line(&mut session, &mut board, "trace").unwrap();
        play_line(&mut session, &mut board, "cxxne").unwrap();
        assert_eq!(session.tracker().state(), GameState::Won);
        assert_eq!(board.row_text(1), "CRANE");
    }

    #[test]
    fn short_line_fills_editable_cells() {
        let (mut session, mut board) = start("crane");
        play_line(&mut session, &mut board, "trace").unwrap();
        play_line(&mut session, &mut board, "cn").unwrap();
        assert_eq!(session.tracker().state(), GameState::Won);
    }

    #[test]
    fn incomplete_line_is_rejected_and_cleared_next_time() {
        let (mut session, mut board) = start("crane");
        let err = play_line(&mut session, &mut board, "cra").unwrap_err();
        assert!(matches!(err, GameError::RowNotFull { filled: 3, .. }));
        assert_eq!(board.message().unwrap().style, MessageStyle::Error);
        assert_eq!(session.active_row(), Some(0));

        play_line(&mut session, &mut board, "slate").unwrap();
        assert_eq!(board.row_text(0), "SLATE");
        assert_eq!(session.active_row(), Some(1));
    }

    #[test]
    fn line_after_game_over_is_rejected() {
        let (mut session, mut board) = start("crane");
        play_line(&mut session, &mut board, "crane").unwrap();
        assert!(matches!(
            play_line(&mut session, &mut board, "slate"),
            Err(GameError::GameOver(GameState::Won))
        ));
    }
}
