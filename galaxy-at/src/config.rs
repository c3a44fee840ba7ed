// galaxy-at-rs/galaxy-at/src/config.rs
//! Session configuration
//!
//! Everything the connect cycle and the AT session need to know is carried
//! in one `SessionConfig` value, so there is no process-wide debug flag or
//! spinner state. Defaults follow what the handset needs in practice: the
//! USB reset dance takes a few seconds, the ACM node appears a second or so
//! after that, and the phone ignores `AT` until it has been unlocked.

use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_BAUD_RATE, DEFAULT_SERIAL_PORT, HANDSHAKE_MAX_FAILURES, TARGET_CONFIGURATION,
};
use crate::types::DeviceId;
use crate::utils::RetryPolicy;

/// Poll interval shared by the enumeration, reconfigure and port waits
pub const POLL_INTERVAL_MS: u64 = 500;

/// Pause before re-running the whole mode switch after a failed handshake
pub const RECONNECT_DELAY_MS: u64 = 3000;

/// Retry budget for the AT ping loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandshakePolicy {
    /// Consecutive link failures before giving up and asking for a USB
    /// re-switch.
    pub max_consecutive_failures: usize,
    /// Upper bound on pings overall, answered or not.
    pub max_attempts: usize,
    /// Pause after a failed ping.
    pub delay: Duration,
}

impl Default for HandshakePolicy {
    fn default() -> Self {
        Self {
            max_consecutive_failures: HANDSHAKE_MAX_FAILURES,
            // ~2 minutes of pinging for the user to unlock the phone
            max_attempts: 120,
            delay: Duration::from_secs(1),
        }
    }
}

impl HandshakePolicy {
    pub fn immediate(max_consecutive_failures: usize, max_attempts: usize) -> Self {
        Self {
            max_consecutive_failures: max_consecutive_failures.max(1),
            max_attempts: max_attempts.max(1),
            delay: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    pub port: PathBuf,
    pub baud_rate: u32,
    pub device: DeviceId,
    pub target_configuration: u8,
    /// Log every command line and response at `info` instead of `debug`.
    pub trace_io: bool,
    /// Draw the progress indicator on stderr.
    pub show_progress: bool,
    pub locate: RetryPolicy,
    pub reconfigure: RetryPolicy,
    pub port_wait: RetryPolicy,
    pub handshake: HandshakePolicy,
    pub crsm: RetryPolicy,
    pub connect: RetryPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let poll = Duration::from_millis(POLL_INTERVAL_MS);
        Self {
            port: PathBuf::from(DEFAULT_SERIAL_PORT),
            baud_rate: DEFAULT_BAUD_RATE,
            device: DeviceId::GALAXY,
            target_configuration: TARGET_CONFIGURATION,
            trace_io: false,
            show_progress: false,
            locate: RetryPolicy::new(240, poll),
            reconfigure: RetryPolicy::new(10, poll),
            port_wait: RetryPolicy::new(15, poll),
            handshake: HandshakePolicy::default(),
            crsm: RetryPolicy::new(20, Duration::ZERO),
            connect: RetryPolicy::new(5, Duration::from_millis(RECONNECT_DELAY_MS)),
        }
    }
}

impl SessionConfig {
    pub fn with_port(mut self, port: impl Into<PathBuf>) -> Self {
        self.port = port.into();
        self
    }

    pub fn with_device(mut self, device: DeviceId) -> Self {
        self.device = device;
        self
    }

    pub fn with_trace_io(mut self, trace_io: bool) -> Self {
        self.trace_io = trace_io;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn with_handshake(mut self, handshake: HandshakePolicy) -> Self {
        self.handshake = handshake;
        self
    }

    pub fn with_crsm_policy(mut self, policy: RetryPolicy) -> Self {
        self.crsm = policy;
        self
    }

    /// Replace every wait with a zero-delay policy of `attempts` attempts.
    /// Used by tests driving the mock backends.
    pub fn without_delays(mut self, attempts: usize) -> Self {
        let p = RetryPolicy::immediate(attempts);
        self.locate = p;
        self.reconfigure = p;
        self.port_wait = p;
        self.crsm = p;
        self.connect = p;
        self.handshake = HandshakePolicy::immediate(
            HANDSHAKE_MAX_FAILURES,
            attempts.max(HANDSHAKE_MAX_FAILURES),
        );
        self
    }
}
