//! Timeout helpers used across the crate.
//!
//! Per-line read budgets for the AT commands the crate issues. A command's
//! worst case is `max_lines * timeout`.

use std::time::Duration;

/// Default per-line timeout in milliseconds for ad-hoc commands.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 500;

/// Ping replies are slow while the phone sits on the lock screen.
pub const PING_TIMEOUT_MS: u64 = 1000;

/// `+CMEE` and `+CRSM` answer immediately when they answer at all.
pub const SHORT_TIMEOUT_MS: u64 = 100;

/// Phone book entries trickle in one per line.
pub const PHONEBOOK_TIMEOUT_MS: u64 = 2000;

/// `+DEVCONINFO` takes several seconds to assemble its reply.
pub const DEVCONINFO_TIMEOUT_MS: u64 = 8000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default read timeout as Duration.
pub fn default_read_timeout() -> Duration {
    ms(DEFAULT_READ_TIMEOUT_MS)
}

/// Upper bound on how long a command may block.
pub fn worst_case(max_lines: usize, per_line: Duration) -> Duration {
    per_line.saturating_mul(u32::try_from(max_lines).unwrap_or(u32::MAX))
}
