//! Bounded hint counter

/// A revealed hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintReveal {
    pub position: usize,
    pub letter: char,
    pub hints_used: usize,
    pub hints_remaining: usize,
}

/// Counts hints used in the current game against a fixed maximum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintCounter {
    used: usize,
    max: usize,
}

impl HintCounter {
    #[must_use]
    pub const fn new(max: usize) -> Self {
        Self { used: 0, max }
    }

    #[inline]
    #[must_use]
    pub const fn used(&self) -> usize {
        self.used
    }

    #[inline]
    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }

    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.max.saturating_sub(self.used)
    }

    #[inline]
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.used >= self.max
    }

    /// Record one hint; returns `false` (and changes nothing) when exhausted
    pub fn take(&mut self) -> bool {
        if self.is_exhausted() {
            return false;
        }
        self.used += 1;
        true
    }

    pub fn reset(&mut self) {
        self.used = 0;
    }
}
