//! Bounded retry policy for secret acquisition

use std::time::Duration;

use super::AnswerSource;
use crate::core::Word;
use crate::error::FetchError;

/// Delay between failed attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// Same delay after every attempt
    Fixed(Duration),
    /// `step × attempt`
    Linear(Duration),
    /// `base × 2^(attempt - 1)`, capped at `max`
    Exponential { base: Duration, max: Duration },
}

impl Backoff {
    /// Delay to wait after the given failed attempt (1-based)
    #[must_use]
    pub fn delay(&self, attempt: u32) -> Duration {
        match *self {
            Self::Fixed(delay) => delay,
            Self::Linear(step) => step.saturating_mul(attempt),
            Self::Exponential { base, max } => {
                let factor = 1u32
                    .checked_shl(attempt.saturating_sub(1))
                    .unwrap_or(u32::MAX);
                base.saturating_mul(factor).min(max)
            }
        }
    }
}

/// How many times to ask a source, how long to wait for each answer, and how
/// long to pause between attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub attempt_timeout: Duration,
    pub backoff: Backoff,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            attempt_timeout: Duration::from_secs(5),
            backoff: Backoff::Linear(Duration::from_secs(1)),
        }
    }
}

/// Fetch a validated secret of `length` letters from `source`
///
/// Each attempt is bounded by `policy.attempt_timeout`. A source error, a timeout
/// or an unusable word all count as a failed attempt. At least one attempt is
/// always made.
///
/// Dropping the returned future cancels the fetch; nothing is produced until an
/// attempt fully succeeds.
///
/// # Errors
/// Returns `FetchError::Exhausted` carrying the last failure once every attempt
/// has failed.
pub async fn fetch_secret<S: AnswerSource>(
    source: &S,
    length: usize,
    policy: &RetryPolicy,
) -> Result<Word, FetchError> {
    let attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        let err = match fetch_once(source, length, policy.attempt_timeout).await {
            Ok(word) => return Ok(word),
            Err(err) => err,
        };

        if attempt >= attempts {
            return Err(FetchError::Exhausted {
                attempts,
                last: Box::new(err),
            });
        }

        tokio::time::sleep(policy.backoff.delay(attempt)).await;
        attempt += 1;
    }
}

async fn fetch_once<S: AnswerSource>(
    source: &S,
    length: usize,
    timeout: Duration,
) -> Result<Word, FetchError> {
    let text = tokio::time::timeout(timeout, source.fetch(length))
        .await
        .map_err(|_| FetchError::Timeout(timeout))??;
    Ok(Word::new(text, length)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;
    use crate::game::{AttemptTracker, GameRules};
    use crate::source::FixedSource;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::time::Instant;

    /// Fails a fixed number of times before answering
    struct FlakySource {
        failures: u32,
        calls: AtomicU32,
        word: &'static str,
    }

    impl FlakySource {
        fn new(failures: u32, word: &'static str) -> Self {
            Self {
                failures,
                calls: AtomicU32::new(0),
                word,
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl AnswerSource for FlakySource {
        async fn fetch(&self, _length: usize) -> Result<String, SourceError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                Err(SourceError::Unavailable(format!("attempt {}", call + 1)))
            } else {
                Ok(self.word.to_string())
            }
        }
    }

    /// Never answers within any reasonable timeout
    struct StalledSource;

    impl AnswerSource for StalledSource {
        async fn fetch(&self, _length: usize) -> Result<String, SourceError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok("PLANET".to_string())
        }
    }

    #[test]
    fn backoff_delays() {
        let second = Duration::from_secs(1);
        assert_eq!(Backoff::Fixed(second).delay(3), second);
        assert_eq!(Backoff::Linear(second).delay(2), Duration::from_secs(2));

        let exponential = Backoff::Exponential {
            base: Duration::from_millis(100),
            max: Duration::from_millis(500),
        };
        assert_eq!(exponential.delay(1), Duration::from_millis(100));
        assert_eq!(exponential.delay(3), Duration::from_millis(400));
        assert_eq!(exponential.delay(4), Duration::from_millis(500));
        assert_eq!(exponential.delay(40), Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn succeeds_after_transient_failures() {
        let source = FlakySource::new(2, "planet");
        let start = Instant::now();

        let word = fetch_secret(&source, 6, &RetryPolicy::default())
            .await
            .unwrap();

        assert_eq!(word.text(), "PLANET");
        assert_eq!(source.calls(), 3);
        // Linear backoff: 1s after the first failure, 2s after the second
        assert_eq!(start.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_after_max_attempts() {
        let source = FlakySource::new(10, "planet");

        let err = fetch_secret(&source, 6, &RetryPolicy::default())
            .await
            .unwrap_err();

        assert_eq!(source.calls(), 3);
        assert_eq!(
            err,
            FetchError::Exhausted {
                attempts: 3,
                last: Box::new(FetchError::Source(SourceError::Unavailable(
                    "attempt 3".to_string()
                ))),
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn wrong_length_counts_as_failure() {
        let source = FixedSource::new("crane");
        let policy = RetryPolicy {
            max_attempts: 2,
            backoff: Backoff::Fixed(Duration::from_millis(10)),
            ..RetryPolicy::default()
        };

        let err = fetch_secret(&source, 6, &policy).await.unwrap_err();
        let FetchError::Exhausted { attempts, last } = err else {
            panic!("expected exhaustion");
        };
        assert_eq!(attempts, 2);
        assert!(matches!(*last, FetchError::Invalid(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn each_attempt_is_timed_out() {
        let policy = RetryPolicy {
            max_attempts: 2,
            attempt_timeout: Duration::from_millis(50),
            backoff: Backoff::Fixed(Duration::from_millis(10)),
        };
        let start = Instant::now();

        let err = fetch_secret(&StalledSource, 6, &policy).await.unwrap_err();

        assert_eq!(
            err,
            FetchError::Exhausted {
                attempts: 2,
                last: Box::new(FetchError::Timeout(Duration::from_millis(50))),
            }
        );
        assert_eq!(start.elapsed(), Duration::from_millis(110));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_attempts_still_tries_once() {
        let source = FlakySource::new(0, "planet");
        let policy = RetryPolicy {
            max_attempts: 0,
            ..RetryPolicy::default()
        };
        assert!(fetch_secret(&source, 6, &policy).await.is_ok());
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_fetch_installs_nothing() {
        let mut tracker = AttemptTracker::new(GameRules::default());

        let cancelled = tokio::time::timeout(
            Duration::from_millis(20),
            fetch_secret(&StalledSource, 6, &RetryPolicy::default()),
        )
        .await;
        assert!(cancelled.is_err());
        assert!(tracker.secret().is_none());

        let word = fetch_secret(&FixedSource::new("planet"), 6, &RetryPolicy::default())
            .await
            .unwrap();
        tracker.set_secret_word(word).unwrap();
        assert_eq!(tracker.secret().unwrap().text(), "PLANET");
    }
}
