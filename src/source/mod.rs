//! Secret word acquisition
//!
//! An [`AnswerSource`] supplies candidate secrets; [`fetch_secret`] wraps one in a
//! bounded retry policy with a per-attempt timeout and validates what comes back.

mod retry;
mod wordlist;

pub use retry::{Backoff, RetryPolicy, fetch_secret};
pub use wordlist::{FixedSource, WordListSource};

use crate::error::SourceError;

/// Something that can produce a secret word of a given length
///
/// Implementations may return anything; [`fetch_secret`] rejects words of the
/// wrong length or with non-letters and counts that as a failed attempt.
pub trait AnswerSource {
    fn fetch(&self, length: usize) -> impl Future<Output = Result<String, SourceError>> + Send;
}
