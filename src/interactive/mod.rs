//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, HINT_MESSAGE_TIMEOUT, Statistics, run_tui};
