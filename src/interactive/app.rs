//! TUI application state and logic

use crate::commands::acquire_secret;
use crate::config::GameConfig;
use crate::game::{
    Board, Direction, GameDisplay, GameState, Intent, MessageStyle, Outcome, Session,
};
use crate::source::AnswerSource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;

/// How long a hint message stays on screen
pub const HINT_MESSAGE_TIMEOUT: Duration = Duration::from_secs(3);

const TICK_RATE: Duration = Duration::from_millis(250);

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses, index 0 = solved on the first row
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> usize {
        if self.total_games == 0 {
            0
        } else {
            self.games_won * 100 / self.total_games
        }
    }

    fn record(&mut self, state: GameState, row: usize) {
        match state {
            GameState::Won => {
                self.total_games += 1;
                self.games_won += 1;
                if self.guess_distribution.len() <= row {
                    self.guess_distribution.resize(row + 1, 0);
                }
                self.guess_distribution[row] += 1;
            }
            GameState::Lost => self.total_games += 1,
            GameState::AwaitingGuess(_) => {}
        }
    }
}

/// Application state
pub struct App<'a, S> {
    pub session: Session,
    pub board: Board,
    pub config: &'a GameConfig,
    pub stats: Statistics,
    pub should_quit: bool,
    source: &'a S,
    runtime: &'a Runtime,
    hint_shown_at: Option<Instant>,
}

impl<'a, S: AnswerSource> App<'a, S> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if no usable secret can be chosen.
    pub fn new(config: &'a GameConfig, source: &'a S, runtime: &'a Runtime) -> Result<Self> {
        let rules = config.rules;
        let mut app = Self {
            session: Session::new(rules),
            board: Board::new(rules.max_rows, rules.word_length),
            config,
            stats: Statistics {
                guess_distribution: vec![0; rules.max_rows],
                ..Statistics::default()
            },
            should_quit: false,
            source,
            runtime,
            hint_shown_at: None,
        };
        app.start_game()?;
        Ok(app)
    }

    fn start_game(&mut self) -> Result<()> {
        let acquired = self
            .runtime
            .block_on(acquire_secret(self.source, self.config))?;
        let warning = acquired.warning();
        self.session.begin(&mut self.board, acquired.word)?;
        if let Some(warning) = warning {
            self.board.show_message(&warning, MessageStyle::Error);
        }
        Ok(())
    }

    /// Send one intent to the session and react to the outcome
    ///
    /// Rejections are already on the board; only a failed restart is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if a new game cannot be started.
    pub fn dispatch(&mut self, intent: Intent) -> Result<()> {
        match self.session.dispatch(&mut self.board, intent) {
            Ok(Outcome::Submitted(outcome)) => {
                self.hint_shown_at = None;
                self.stats.record(outcome.state, outcome.row);
            }
            Ok(Outcome::HintRevealed(_)) => self.hint_shown_at = Some(Instant::now()),
            Ok(Outcome::SecretRequired) => {
                self.hint_shown_at = None;
                self.start_game()?;
            }
            Ok(Outcome::Ignored | Outcome::Edited | Outcome::Moved { .. }) | Err(_) => {}
        }
        Ok(())
    }

    /// Map a key press to an intent
    ///
    /// # Errors
    ///
    /// Returns an error if a new game cannot be started.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.dispatch(Intent::RestartRequested)?,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.dispatch(Intent::HintRequested)?,
            KeyCode::Enter => {
                if self.session.active_row().is_none() {
                    self.dispatch(Intent::RestartRequested)?;
                } else if self.board.submit_enabled() {
                    self.dispatch(Intent::SubmitRequested)?;
                } else {
                    self.navigate(Direction::Forward)?;
                }
            }
            KeyCode::Left => self.navigate(Direction::Backward)?,
            KeyCode::Right => self.navigate(Direction::Forward)?,
            KeyCode::Backspace => {
                if let Some((row, column)) = self.board.focus() {
                    let filled = self
                        .board
                        .cell(row, column)
                        .is_some_and(|cell| cell.letter.is_some());
                    if filled {
                        self.dispatch(Intent::CellChanged {
                            row,
                            column,
                            value: None,
                        })?;
                    } else {
                        self.navigate(Direction::Backward)?;
                    }
                }
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some((row, column)) = self.board.focus() {
                    self.dispatch(Intent::CellChanged {
                        row,
                        column,
                        value: Some(c),
                    })?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Paste text at the focused cell
    ///
    /// # Errors
    ///
    /// Never fails in practice; shares the dispatch signature.
    pub fn paste(&mut self, text: &str) -> Result<()> {
        if let Some((row, column)) = self.board.focus() {
            self.dispatch(Intent::LettersPasted {
                row,
                column,
                letters: text.to_string(),
            })?;
        }
        Ok(())
    }

    /// Expire the hint message once it has been shown long enough
    pub fn tick(&mut self, now: Instant) {
        let Some(shown_at) = self.hint_shown_at else {
            return;
        };
        if now.duration_since(shown_at) < HINT_MESSAGE_TIMEOUT {
            return;
        }
        if self
            .board
            .message()
            .is_some_and(|message| message.style == MessageStyle::Hint)
        {
            self.board.clear_message();
        }
        self.hint_shown_at = None;
    }

    fn navigate(&mut self, direction: Direction) -> Result<()> {
        if let Some((row, column)) = self.board.focus() {
            self.dispatch(Intent::NavigateRequested {
                row,
                column,
                direction,
            })?;
        }
        Ok(())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal initialization or restoration fails.
pub fn run_tui<S: AnswerSource>(app: App<'_, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: AnswerSource>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK_RATE)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key)?,
                Event::Paste(text) => app.paste(&text)?,
                _ => {}
            }
        }
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
