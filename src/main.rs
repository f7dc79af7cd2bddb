//! Wordle Game - CLI
//!
//! Wordle-style game with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;
use wordle_game::{
    commands::{build_source, check_guess, run_simple},
    config::GameConfig,
    output::print_check_result,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the secret word, with letters carried over between rows and a few hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Word length (overrides config)
    #[arg(short, long, global = true)]
    length: Option<usize>,

    /// Number of guess rows (overrides config)
    #[arg(short, long, global = true)]
    rows: Option<usize>,

    /// Number of hints per game (overrides config)
    #[arg(long, global = true)]
    hints: Option<usize>,

    /// Wordlist: 'embedded' (default) or path to file
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Evaluate one guess against a secret
    Check {
        /// The secret word
        secret: String,

        /// The guess; use '_' for blank cells
        guess: String,
    },
}

/// Load the config file and apply command-line overrides
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load_or_default(path)?,
        None => GameConfig::default(),
    };

    if let Some(length) = cli.length {
        config.rules.word_length = length;
    }
    if let Some(rows) = cli.rows {
        config.rules.max_rows = rows;
    }
    if let Some(hints) = cli.hints {
        config.rules.max_hints = hints;
    }
    match cli.wordlist.as_deref() {
        Some("embedded") => config.wordlist = None,
        Some(path) => config.wordlist = Some(PathBuf::from(path)),
        None => {}
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn build_runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to start async runtime")
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Check { secret, guess } => run_check_command(&secret, &guess),
        Commands::Simple => {
            let config = load_config(&cli)?;
            let source = build_source(&config)?;
            let runtime = build_runtime()?;
            run_simple(&config, &source, &runtime)
        }
        Commands::Play => run_play_command(&load_config(&cli)?),
    }
}

fn run_check_command(secret: &str, guess: &str) -> Result<()> {
    let result = check_guess(secret, guess)?;
    print_check_result(&result.secret, &result.guess, &result.feedback);
    Ok(())
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let source = build_source(config)?;
    let runtime = build_runtime()?;
    let app = App::new(config, &source, &runtime)?;
    run_tui(app)
}
