//! Command implementations

pub mod check;
pub mod secret;
pub mod simple;

pub use check::{CheckResult, check_guess};
pub use secret::{Acquired, acquire_secret, build_source};
pub use simple::{LineCommand, play_line, run_simple};
