//! Wordle Game
//!
//! A Wordle-style word game: duplicate-aware guess evaluation, an attempt
//! tracker with carried-over letters and hints, and bounded-retry secret
//! fetching, with TUI and line-mode front ends.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Guess, LetterState, Word, evaluate};
//!
//! let secret = Word::new("crane", 5).unwrap();
//! let guess = Guess::parse("trace").unwrap();
//!
//! let feedback = evaluate(&secret, &guess).unwrap();
//! assert_eq!(feedback.states()[1], LetterState::InPlace);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Game state machine and intent dispatch
pub mod game;

// Secret word sources and retry policy
pub mod source;

// Word lists
pub mod wordlists;

// Configuration
pub mod config;

// Error types
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
