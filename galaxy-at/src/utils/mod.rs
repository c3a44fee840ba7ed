//! Utilities for galaxy-at: small, reusable helpers used across the crate.
//!
//! Hex helpers for EF payloads, timeout conversions, and the pieces every
//! bounded wait is built from (retry policy, cancellation, progress).

pub mod cancel;
pub mod hex;
pub mod progress;
pub mod retry;
pub mod timeout;

// Re-export the most common helpers at the `utils` module level so callers can
// use `crate::utils::swap_nibbles(...)` etc if they prefer.
pub use cancel::CancelToken;
pub use hex::*;
pub use progress::Progress;
pub use retry::RetryPolicy;
pub use timeout::*;

/// State threaded through every blocking wait: the caller's cancellation
/// signal and the progress indicator. Replaces a process-wide spinner
/// counter.
#[derive(Debug, Clone, Default)]
pub struct WaitContext {
    pub cancel: CancelToken,
    pub progress: Progress,
}

impl WaitContext {
    pub fn new(cancel: CancelToken, progress: Progress) -> Self {
        Self { cancel, progress }
    }

    /// Context for tests and library callers: no terminal output, never
    /// cancelled unless the returned token is.
    pub fn quiet() -> Self {
        Self {
            cancel: CancelToken::new(),
            progress: Progress::hidden(),
        }
    }
}
