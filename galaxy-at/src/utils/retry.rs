//! Bounded retry policy shared by every polling loop in the crate.

use std::time::Duration;

use crate::Result;
use crate::utils::CancelToken;

/// Maximum attempts plus a fixed delay between them. A policy never allows
/// fewer than one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RetryPolicy {
    max_attempts: usize,
    delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: usize, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// No delay between attempts. Handy in tests.
    pub fn immediate(max_attempts: usize) -> Self {
        Self::new(max_attempts, Duration::ZERO)
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Attempt numbers, 1-based.
    pub fn attempts(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.max_attempts
    }

    /// Sleep for the configured delay, checking the cancel token on both
    /// sides of the sleep.
    pub fn pause(&self, cancel: &CancelToken) -> Result<()> {
        cancel.check()?;
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        cancel.check()
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(10, Duration::from_millis(500))
    }
}
